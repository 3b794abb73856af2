/// The scrapbook project: the ordered photo collection and its layout
///
/// `Project` is the single owner of all photos. Every mutation of the
/// collection recomputes the derived page list before returning — that is
/// an invariant of these methods, not a courtesy expected from callers —
/// so the layout can never go stale. Edit writes go through the lookup
/// methods here too, which lets the project bump its revision counter only
/// when something actually changed.

use crate::state::layout::Layout;
use crate::state::page::Page;
use crate::state::photo::{Photo, PhotoId};

#[derive(Debug)]
pub struct Project {
    /// Ordered photo selection: order of addition = layout order
    photos: Vec<Photo>,
    /// Derived page list, rebuilt on every collection change
    layout: Layout,
    /// Bumped on every actual state write (collection or edit state);
    /// lets the view layer cheaply detect that something changed
    revision: u64,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            layout: Layout::new(),
            revision: 0,
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        self.layout.pages()
    }

    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Look up a photo by id
    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id() == id)
    }

    /// Look up a photo by id for mutation.
    ///
    /// Callers that change edit state through this must report the change
    /// via `mark_edited` so the revision counter moves; the convenience
    /// setters below do both.
    pub fn photo_mut(&mut self, id: PhotoId) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|p| p.id() == id)
    }

    /// Append a batch of photos in selection order and re-paginate
    pub fn add_photos(&mut self, batch: Vec<Photo>) {
        if batch.is_empty() {
            return;
        }
        self.photos.extend(batch);
        self.after_collection_change();
    }

    /// Remove the photo with the given id and re-paginate.
    /// Returns false (and recomputes nothing) when the id is unknown.
    pub fn remove_photo(&mut self, id: PhotoId) -> bool {
        let Some(index) = self.photos.iter().position(|p| p.id() == id) else {
            return false;
        };
        self.photos.remove(index);
        self.after_collection_change();
        true
    }

    /// Remove every photo and re-paginate (to the empty page list)
    pub fn clear(&mut self) {
        if self.photos.is_empty() {
            return;
        }
        self.photos.clear();
        self.after_collection_change();
    }

    /// Write a new scale onto a photo's edit state.
    /// Returns true if the stored value changed.
    pub fn set_scale(&mut self, id: PhotoId, scale: f32) -> bool {
        let Some(photo) = self.photo_mut(id) else {
            return false;
        };
        let changed = photo.edit.set_scale(scale);
        if changed {
            self.mark_edited();
        }
        changed
    }

    /// Write a new offset onto a photo's edit state.
    /// Returns true if the stored value changed.
    pub fn set_offset(&mut self, id: PhotoId, x: f32, y: f32) -> bool {
        let Some(photo) = self.photo_mut(id) else {
            return false;
        };
        let changed = photo.edit.set_offset(x, y);
        if changed {
            self.mark_edited();
        }
        changed
    }

    /// Write a new brightness value and refresh the photo's display handle
    pub fn set_brightness(&mut self, id: PhotoId, brightness: f32) -> bool {
        let Some(photo) = self.photo_mut(id) else {
            return false;
        };
        let changed = photo.edit.set_brightness(brightness);
        if changed {
            photo.refresh_handle();
            self.mark_edited();
        }
        changed
    }

    /// Write a new contrast value and refresh the photo's display handle
    pub fn set_contrast(&mut self, id: PhotoId, contrast: f32) -> bool {
        let Some(photo) = self.photo_mut(id) else {
            return false;
        };
        let changed = photo.edit.set_contrast(contrast);
        if changed {
            photo.refresh_handle();
            self.mark_edited();
        }
        changed
    }

    /// Reset a photo's edit state to defaults
    pub fn reset_edits(&mut self, id: PhotoId) -> bool {
        let Some(photo) = self.photo_mut(id) else {
            return false;
        };
        if photo.edit.is_unedited() {
            return false;
        }
        photo.edit.reset();
        photo.refresh_handle();
        self.mark_edited();
        true
    }

    /// Record an edit-state write made directly through `photo_mut`
    pub fn mark_edited(&mut self) {
        self.revision += 1;
    }

    fn after_collection_change(&mut self) {
        self.layout.recompute(&self.photos);
        self.revision += 1;
    }
}
