/// A fixed-capacity page of the scrapbook layout
///
/// Pages reference photos by id rather than owning them: the ordered photo
/// collection is the single source of truth, and pages are a derived view
/// that gets fully rebuilt whenever the collection changes. Resolving ids
/// at render time means live scale/offset edits show up without any extra
/// notification channel.

use crate::constants::PHOTOS_PER_PAGE;
use crate::state::photo::PhotoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based position of this page in the layout
    number: usize,
    /// Photos on this page, in layout order (at most PHOTOS_PER_PAGE)
    photos: Vec<PhotoId>,
}

impl Page {
    /// Create an empty page with the given 1-based number
    pub fn new(number: usize) -> Self {
        Self {
            number,
            photos: Vec::with_capacity(PHOTOS_PER_PAGE),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn photos(&self) -> &[PhotoId] {
        &self.photos
    }

    /// A page is full exactly when it holds PHOTOS_PER_PAGE photos
    pub fn is_full(&self) -> bool {
        self.photos.len() >= PHOTOS_PER_PAGE
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Add a photo to this page. Refuses silently past capacity; the
    /// pagination engine never lets that happen.
    pub fn push(&mut self, id: PhotoId) {
        if self.photos.len() < PHOTOS_PER_PAGE {
            self.photos.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_at_capacity() {
        let mut page = Page::new(1);
        assert!(page.is_empty());
        assert!(!page.is_full());

        page.push(PhotoId::for_test(1));
        assert!(!page.is_full());

        page.push(PhotoId::for_test(2));
        assert!(page.is_full());
    }

    #[test]
    fn test_push_refuses_past_capacity() {
        let mut page = Page::new(1);
        page.push(PhotoId::for_test(1));
        page.push(PhotoId::for_test(2));
        page.push(PhotoId::for_test(3));

        assert_eq!(page.photos().len(), 2);
        assert_eq!(
            page.photos(),
            &[PhotoId::for_test(1), PhotoId::for_test(2)]
        );
    }
}
