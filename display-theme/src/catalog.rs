use crate::error::{Result, ThemeError};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// An image file found in the display directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
}

impl CatalogEntry {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// List the image files directly inside `dir`, sorted by file name.
/// Subdirectories are not descended into.
pub fn scan_catalog(dir: &Path) -> Result<Vec<CatalogEntry>> {
    let read_error = |source| ThemeError::CatalogRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_image_file(&path) {
            entries.push(CatalogEntry { path });
        }
    }

    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    log::debug!("found {} images in {}", entries.len(), dir.display());
    Ok(entries)
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn recognises_image_extensions() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("dir/b.jpg")));
        assert!(is_image_file(Path::new("c.JPEG")));
        assert!(!is_image_file(Path::new("d.gif")));
        assert!(!is_image_file(Path::new("png")));
        assert!(!is_image_file(Path::new("e.png.txt")));
    }

    #[test]
    fn scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.png", "notes.txt", "c.jpeg"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = scan_catalog(dir.path())
            .unwrap()
            .iter()
            .map(CatalogEntry::file_name)
            .collect();
        assert_eq!(names, ["a.png", "b.jpg", "c.jpeg"]);
    }

    #[test]
    fn missing_directory_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_catalog(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ThemeError::CatalogRead { .. }));
    }
}
