/// The photo entity
///
/// A `Photo` is created once per accepted file from the picker. Its
/// orientation decision is frozen at load time: a portrait source must be
/// rotated 90° before placement (every slot is landscape), so the stored
/// bitmap is already in processed (rotated) form and `needs_rotation` is
/// never recomputed afterward. A file that fails to decode still produces a
/// `Photo` with zero-size dimensions and no bitmap; callers treat that as
/// "failed decode", never as a reason to reject the add.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use iced::widget::image::Handle;
use image::{imageops, RgbaImage};

use super::edit::EditState;
use crate::loader::LoadedPhoto;

/// Stable unique identity for a photo
///
/// Ids are generated per-load, not per-source-file: adding the same file
/// twice produces two distinct photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(u64);

impl PhotoId {
    /// Allocate the next id from a process-global counter
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
impl PhotoId {
    /// Fixed id for tests that only care about identity
    pub(crate) const fn for_test(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single photo in the scrapbook selection
#[derive(Debug, Clone)]
pub struct Photo {
    /// Unique id, assigned at construction
    id: PhotoId,
    /// Source file this photo was loaded from
    path: PathBuf,
    /// Intrinsic pixel width of the source, before any rotation (0 if decode failed)
    width: u32,
    /// Intrinsic pixel height of the source, before any rotation (0 if decode failed)
    height: u32,
    /// Whether the source is taller than wide (frozen at construction)
    is_portrait: bool,
    /// Whether the photo was rotated 90° at load time (frozen, == is_portrait)
    needs_rotation: bool,
    /// Processed bitmap: rotated if needed, None if decode failed
    bitmap: Option<RgbaImage>,
    /// Display handle for the current bitmap + pixel adjustments
    handle: Option<Handle>,
    /// Mutable edit state (scale, offset, pixel adjustments)
    pub edit: EditState,
}

impl Photo {
    /// Construct a photo from a load result.
    ///
    /// The orientation flags are derived from the intrinsic dimensions here
    /// and never touched again. A failed load (zero-size, no bitmap) yields
    /// a valid photo in the failed-decode state.
    pub fn new(loaded: LoadedPhoto) -> Self {
        let is_portrait = loaded.height > loaded.width;
        let handle = loaded.bitmap.as_ref().map(handle_from_bitmap);

        Self {
            id: PhotoId::next(),
            path: loaded.path,
            width: loaded.width,
            height: loaded.height,
            is_portrait,
            needs_rotation: is_portrait,
            bitmap: loaded.bitmap,
            handle,
            edit: EditState::new(),
        }
    }

    pub fn id(&self) -> PhotoId {
        self.id
    }

    /// Source file name for labels, falling back to the full path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Intrinsic source dimensions, before rotation
    pub fn intrinsic_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_portrait(&self) -> bool {
        self.is_portrait
    }

    pub fn needs_rotation(&self) -> bool {
        self.needs_rotation
    }

    /// True when the source could not be decoded
    pub fn is_failed(&self) -> bool {
        self.bitmap.is_none()
    }

    /// Display handle for the processed image with current pixel adjustments
    /// applied. None for failed photos; the UI draws a placeholder instead.
    pub fn display_handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Regenerate the display handle from the processed bitmap and the
    /// current brightness/contrast values. Called after a pixel adjustment
    /// actually changed; a no-op for failed photos.
    pub fn refresh_handle(&mut self) {
        let Some(bitmap) = &self.bitmap else {
            return;
        };

        if !self.edit.has_pixel_adjustments() {
            self.handle = Some(handle_from_bitmap(bitmap));
            return;
        }

        // Brightness is a per-channel offset, contrast a percentage change
        let brightened = imageops::brighten(bitmap, (self.edit.brightness * 255.0) as i32);
        let adjusted = imageops::contrast(&brightened, (self.edit.contrast - 1.0) * 100.0);
        self.handle = Some(handle_from_bitmap(&adjusted));
    }
}

/// Photos compare by id, nothing else. Two photos loaded from the same
/// file are distinct entities.
impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Photo {}

fn handle_from_bitmap(bitmap: &RgbaImage) -> Handle {
    Handle::from_rgba(bitmap.width(), bitmap.height(), bitmap.clone().into_raw())
}
