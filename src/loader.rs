/// Background image loader
///
/// Decoding is the one operation slow enough to hurt the event loop, so it
/// runs on a blocking worker and its results come back as a message. The
/// loader never fails outward: a file that cannot be decoded still yields a
/// `LoadedPhoto` in the failed state (zero-size, no bitmap), which becomes
/// a placeholder photo rather than an aborted add.
///
/// Portrait sources are rotated 90° clockwise here, at load time, because
/// every page slot is landscape. The photo entity freezes that decision;
/// the stored bitmap is already in its final orientation.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;
use tokio::task;

/// File extensions accepted by the file picker and the folder scan
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp",
];

/// Why a single file failed to load. Internal to the loader boundary;
/// failures leave this module as data on the `LoadedPhoto`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result of loading one file
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    /// Source file
    pub path: PathBuf,
    /// Intrinsic pixel width before rotation (0 when the decode failed)
    pub width: u32,
    /// Intrinsic pixel height before rotation (0 when the decode failed)
    pub height: u32,
    /// Decoded pixels, already rotated for portrait sources; None on failure
    pub bitmap: Option<RgbaImage>,
}

impl LoadedPhoto {
    /// The failed-decode state for a file
    pub fn failed(path: PathBuf) -> Self {
        Self {
            path,
            width: 0,
            height: 0,
            bitmap: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.bitmap.is_none()
    }
}

/// True for files the picker and the folder scan should accept
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Load a whole file selection in one background pass.
///
/// Results come back in selection order, one entry per requested path,
/// failed decodes included.
pub async fn load_batch(paths: Vec<PathBuf>) -> Vec<LoadedPhoto> {
    // Keep the paths around so even a lost worker yields failed entries
    // instead of silently dropping part of the selection
    let requested = paths.clone();

    task::spawn_blocking(move || paths.into_iter().map(load_blocking).collect())
        .await
        .unwrap_or_else(|e| {
            eprintln!("⚠️  Photo load task failed: {e}");
            requested.into_iter().map(LoadedPhoto::failed).collect()
        })
}

/// Blocking load of a single file. Never fails outward.
fn load_blocking(path: PathBuf) -> LoadedPhoto {
    match decode(&path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("⚠️  Failed to load {}: {e}", path.display());
            LoadedPhoto::failed(path)
        }
    }
}

fn decode(path: &Path) -> Result<LoadedPhoto, LoadError> {
    // Verify file exists
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path)?;
    let (width, height) = (img.width(), img.height());

    // Portrait sources get their one-time rotation here
    let processed = if height > width { img.rotate90() } else { img };

    Ok(LoadedPhoto {
        path: path.to_path_buf(),
        width,
        height,
        bitmap: Some(processed.to_rgba8()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_yields_failed_photo() {
        let results = load_batch(vec![PathBuf::from("/nonexistent/photo.jpg")]).await;

        assert_eq!(results.len(), 1);
        assert!(results[0].is_failed());
        assert_eq!(results[0].width, 0);
        assert_eq!(results[0].height, 0);
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_length() {
        let paths = vec![
            PathBuf::from("/nope/a.jpg"),
            PathBuf::from("/nope/b.png"),
            PathBuf::from("/nope/c.gif"),
        ];
        let results = load_batch(paths.clone()).await;

        assert_eq!(results.len(), 3);
        for (requested, result) in paths.iter().zip(&results) {
            assert_eq!(&result.path, requested);
        }
    }

    #[tokio::test]
    async fn test_portrait_source_is_rotated_at_load() {
        // Write a small portrait PNG to a temp path, load it back
        let path = std::env::temp_dir().join(format!(
            "scrapbook_loader_test_{}.png",
            std::process::id()
        ));
        RgbaImage::new(2, 4).save(&path).unwrap();

        let results = load_batch(vec![path.clone()]).await;
        let _ = std::fs::remove_file(&path);

        let loaded = &results[0];
        assert!(!loaded.is_failed());

        // Intrinsic dimensions report the source as scanned...
        assert_eq!((loaded.width, loaded.height), (2, 4));

        // ...while the stored bitmap is already rotated to landscape
        let bitmap = loaded.bitmap.as_ref().unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (4, 2));
    }

    #[test]
    fn test_image_file_detection() {
        assert!(is_image_file(Path::new("photo.JPG")));
        assert!(is_image_file(Path::new("photo.webp")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("no_extension")));
    }
}
