/// Pagination engine and layout orchestrator
///
/// `paginate` is the pure core: it walks the ordered photo collection and
/// packs it two-per-page, producing densely numbered pages. `Layout` owns
/// the current page list and replaces it wholesale on every recompute —
/// no incremental patching, which is the simplest correct policy for the
/// dozens of photos a scrapbook holds.

use crate::constants::PHOTOS_PER_PAGE;
use crate::state::page::Page;
use crate::state::photo::Photo;

/// Assign an ordered photo sequence onto fixed-capacity pages.
///
/// # Behavior
///
/// - Photos keep their order; none are dropped or duplicated
/// - Every page except possibly the last is full
/// - Page numbers form the contiguous sequence 1..=ceil(N / capacity)
/// - Empty input produces an empty page list
/// - A single photo produces one page with one slot filled
///
/// Pure function: same input sequence, same output, every time.
pub fn paginate(photos: &[Photo]) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::with_capacity(photos.len().div_ceil(PHOTOS_PER_PAGE));
    let mut current = Page::new(1);

    for photo in photos {
        if current.is_full() {
            pages.push(current);
            current = Page::new(pages.len() + 1);
        }
        current.push(photo.id());
    }

    // Seal the trailing partial page
    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

/// Owns the derived page list and rebuilds it from the photo collection.
///
/// Recompute is synchronous and total: the old list stays in place until
/// the new one fully replaces it, so a render read never sees a
/// half-built layout.
#[derive(Debug, Default)]
pub struct Layout {
    pages: Vec<Page>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the current pages, for presentation
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Replace the page list with a fresh pagination of `photos`
    pub fn recompute(&mut self, photos: &[Photo]) {
        self.pages = paginate(photos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadedPhoto;
    use std::path::PathBuf;

    fn photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| Photo::new(LoadedPhoto::failed(PathBuf::from(format!("p{i}.jpg")))))
            .collect()
    }

    #[test]
    fn test_empty_input_gives_no_pages() {
        assert!(paginate(&[]).is_empty());
    }

    #[test]
    fn test_single_photo_gives_one_partial_page() {
        let photos = photos(1);
        let pages = paginate(&photos);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number(), 1);
        assert_eq!(pages[0].photos(), &[photos[0].id()]);
        assert!(!pages[0].is_full());
    }

    #[test]
    fn test_capacity_order_and_numbering() {
        // ceil(N/2) pages, <= 2 photos each, order preserved, numbers 1..=N
        for count in 0..=9 {
            let photos = photos(count);
            let pages = paginate(&photos);

            assert_eq!(pages.len(), count.div_ceil(2), "count = {count}");

            let flattened: Vec<_> = pages
                .iter()
                .flat_map(|p| p.photos().iter().copied())
                .collect();
            let expected: Vec<_> = photos.iter().map(|p| p.id()).collect();
            assert_eq!(flattened, expected, "count = {count}");

            for (index, page) in pages.iter().enumerate() {
                assert_eq!(page.number(), index + 1, "count = {count}");
                assert!(page.photos().len() <= 2);
                // Only the last page may be partial
                if index + 1 < pages.len() {
                    assert!(page.is_full());
                }
            }
        }
    }

    #[test]
    fn test_pagination_is_deterministic() {
        let photos = photos(7);
        assert_eq!(paginate(&photos), paginate(&photos));
    }

    #[test]
    fn test_recompute_replaces_pages() {
        let mut layout = Layout::new();
        let five = photos(5);

        layout.recompute(&five);
        assert_eq!(layout.page_count(), 3);

        layout.recompute(&five[..2]);
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.pages()[0].photos(), &[five[0].id(), five[1].id()]);

        layout.recompute(&[]);
        assert_eq!(layout.page_count(), 0);
    }
}
