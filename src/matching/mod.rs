/// Image-to-label matching module
///
/// This module handles:
/// - Parsing image filenames into (group, ordinal) keys (filename.rs)
/// - Grouping candidates by global page number (index.rs)
/// - Allocating candidates to catalog rows (allocate.rs)

pub mod allocate;
pub mod filename;
pub mod index;

/// Compute the global page number for a catalog row.
///
/// Books are numbered from 1 and each holds `pages_per_book` pages, so
/// book 1 covers global pages 1..=pages_per_book, book 2 the next block,
/// and so on. Image filenames encode this same global number.
///
/// No bounds are checked: a book or page outside the real range just
/// produces a number no image group carries (or one that collides with a
/// neighboring book's range).
pub fn global_page(book: u32, page: u32, pages_per_book: u32) -> u32 {
    book.saturating_sub(1) * pages_per_book + page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_first_book() {
        assert_eq!(global_page(1, 1, 16), 1);
    }

    #[test]
    fn test_first_page_of_second_book() {
        assert_eq!(global_page(2, 1, 16), 17);
    }

    #[test]
    fn test_last_page_of_first_book() {
        assert_eq!(global_page(1, 16, 16), 16);
    }
}
