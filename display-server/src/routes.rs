use crate::api::load_data;
use crate::assets::{serve_css, serve_image, serve_index, serve_js, serve_res};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/image/{name}", get(serve_image))
        .route("/js/{*path}", get(serve_js))
        .route("/api/data", get(load_data))
        .route("/css/{*path}", get(serve_css))
        .route("/res/{*path}", get(serve_res))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetSource;
    use crate::config::Settings;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use display_prayer::Location;
    use display_theme::ThemeConfig;
    use image::{Rgb, RgbImage};
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct Fixture {
        display: TempDir,
        assets: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let fixture = Self {
                display: tempfile::tempdir().unwrap(),
                assets: tempfile::tempdir().unwrap(),
            };
            let js = fixture.assets.path().join("js");
            fs::create_dir_all(&js).unwrap();
            fs::write(js.join("app.min.js"), "minified").unwrap();
            fs::write(js.join("app.js"), "readable").unwrap();
            fs::create_dir_all(fixture.assets.path().join("css")).unwrap();
            fs::write(fixture.assets.path().join("css/style.css"), "body{}").unwrap();
            fs::write(fixture.assets.path().join("index.html"), "<html></html>").unwrap();
            fixture
        }

        fn app(&self, display_dir: &Path, dev_mode: bool) -> Router {
            let assets = AssetSource::Disk(self.assets.path().to_path_buf());
            app_with(display_dir, assets, dev_mode)
        }
    }

    fn app_with(display_dir: &Path, assets: AssetSource, dev_mode: bool) -> Router {
        let settings = Settings {
            port: 0,
            display_dir: display_dir.to_path_buf(),
            assets,
            dev_mode,
            theme: ThemeConfig {
                workers: 2,
                ..Default::default()
            },
            location: Location {
                latitude: -2.2307069,
                longitude: 113.9301163,
                elevation: 5.0,
            },
        };
        create_app(Arc::new(AppState::from_settings(settings).unwrap()))
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn write_png(path: &Path) {
        RgbImage::from_pixel(30, 30, Rgb([18, 52, 86])).save(path).unwrap();
    }

    #[tokio::test]
    async fn data_skips_corrupt_images() {
        let fixture = Fixture::new();
        write_png(&fixture.display.path().join("mosque.png"));
        fs::write(fixture.display.path().join("broken.jpeg"), b"garbage").unwrap();

        let (status, body) = fetch(fixture.app(fixture.display.path(), false), "/api/data").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["events"].as_array().unwrap().len(), 7);
        assert_eq!(json["events"][0]["name"], "fajr");

        let images = json["images"].as_array().unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0]["url"], "/image/mosque.png");
        assert_eq!(images[0]["mainColor"], "#123456");
        assert_eq!(images[0]["headerMain"], "rgba(18, 52, 86, 0.700)");
        assert_eq!(images[0]["footerFont"], "#ffffff");
    }

    #[tokio::test]
    async fn missing_display_dir_is_server_error() {
        let fixture = Fixture::new();
        let missing = fixture.display.path().join("nope");

        let (status, body) = fetch(fixture.app(&missing, false), "/api/data").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["status"], 500);
    }

    #[tokio::test]
    async fn images_are_served_by_name() {
        let fixture = Fixture::new();
        write_png(&fixture.display.path().join("mosque.png"));
        let app = fixture.app(fixture.display.path(), false);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/image/mosque.png").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let (status, _) = fetch(app.clone(), "/image/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = fetch(app, "/image/..%2Fsecret").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dev_mode_prefers_unminified_scripts() {
        let fixture = Fixture::new();

        let (_, body) = fetch(fixture.app(fixture.display.path(), false), "/js/app.min.js").await;
        assert_eq!(body, b"minified");

        let (_, body) = fetch(fixture.app(fixture.display.path(), true), "/js/app.min.js").await;
        assert_eq!(body, b"readable");
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let fixture = Fixture::new();
        let app = fixture.app(fixture.display.path(), false);

        let (status, body) = fetch(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html></html>");

        let (status, body) = fetch(app, "/css/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"body{}");
    }

    #[tokio::test]
    async fn front_end_is_served_without_assets_dir() {
        let display = tempfile::tempdir().unwrap();
        let app = app_with(display.path(), AssetSource::Embedded, false);

        let (status, body) = fetch(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8_lossy(&body).contains("/js/index.min.js"));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/js/index.min.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/javascript");
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");

        let (status, _) = fetch(app.clone(), "/css/style.css").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = fetch(app, "/js/missing.min.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
