use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::path::{Component, Path as FsPath, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;

/// The front end compiled into the binary.
#[derive(RustEmbed)]
#[folder = "view/"]
#[exclude = "*.less"]
struct ViewAssets;

/// Where front-end files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    Disk(PathBuf),
}

impl AssetSource {
    /// The crate's own `view` directory, used in dev mode when no other
    /// directory is given.
    pub fn source_tree() -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/view"))
    }

    pub fn describe(&self) -> String {
        match self {
            AssetSource::Embedded => "embedded bundle".to_string(),
            AssetSource::Disk(dir) => dir.display().to_string(),
        }
    }
}

/// `GET /`
pub async fn serve_index(State(state): State<Arc<AppState>>, request: Request) -> Response {
    serve_asset(&state.assets, "index.html", request).await
}

/// `GET /css/{*path}`
pub async fn serve_css(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    request: Request,
) -> Response {
    serve_asset(&state.assets, &format!("css/{path}"), request).await
}

/// `GET /res/{*path}`
pub async fn serve_res(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    request: Request,
) -> Response {
    serve_asset(&state.assets, &format!("res/{path}"), request).await
}

/// `GET /js/{*path}`. In dev mode `x.min.js` is answered with `x.js` when
/// the unminified file is present on disk.
pub async fn serve_js(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    request: Request,
) -> Response {
    let relative = format!("js/{path}");

    if let (true, AssetSource::Disk(root)) = (state.dev_mode, &state.assets) {
        let unminified = join_relative(root, &relative).and_then(|file| unminified_script(&file));
        if let Some(file) = unminified {
            if tokio::fs::try_exists(&file).await.unwrap_or(false) {
                log::debug!("dev mode: serving {}", file.display());
                return serve_file(file, request).await;
            }
        }
    }

    serve_asset(&state.assets, &relative, request).await
}

/// `GET /image/{name}`: a background image straight from the display
/// directory.
pub async fn serve_image(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    request: Request,
) -> Response {
    match join_relative(&state.display_dir, &name) {
        Some(path) if path.parent() == Some(state.display_dir.as_path()) => {
            serve_file(path, request).await
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve_asset(source: &AssetSource, relative: &str, request: Request) -> Response {
    match source {
        AssetSource::Disk(root) => match join_relative(root, relative) {
            Some(path) => serve_file(path, request).await,
            None => StatusCode::NOT_FOUND.into_response(),
        },
        AssetSource::Embedded => serve_embedded(relative),
    }
}

fn serve_embedded(relative: &str) -> Response {
    if join_relative(FsPath::new(""), relative).is_none() || !is_bundled(relative) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match ViewAssets::get(relative) {
        Some(file) => (
            [
                (header::CONTENT_TYPE, content_type(relative)),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff".to_string()),
            ],
            Body::from(file.data),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve_file(path: PathBuf, request: Request) -> Response {
    ServeFile::new(path).oneshot(request).await.into_response()
}

/// Only minified scripts are bundled, except those directly under `js/`.
/// Stylesheet sources are never bundled.
fn is_bundled(relative: &str) -> bool {
    let path = FsPath::new(relative);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("less") => false,
        Some("js") => path.parent() == Some(FsPath::new("js")) || relative.ends_with(".min.js"),
        _ => true,
    }
}

fn content_type(relative: &str) -> String {
    let ext = FsPath::new(relative)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "css" => "text/css; charset=utf-8".to_string(),
        "html" => "text/html; charset=utf-8".to_string(),
        "js" => "application/javascript".to_string(),
        "png" => "image/png".to_string(),
        _ => mime_guess::from_path(relative)
            .first_or_octet_stream()
            .to_string(),
    }
}

/// Join `relative` onto `root`, refusing anything that could leave it.
fn join_relative(root: &FsPath, relative: &str) -> Option<PathBuf> {
    let relative = FsPath::new(relative);
    let mut components = relative.components().peekable();
    components.peek()?;
    if !components.all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(relative))
}

fn unminified_script(path: &FsPath) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".min.js")?;
    Some(path.with_file_name(format!("{stem}.js")))
}
