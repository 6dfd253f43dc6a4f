//! Pagination

use crate::QueryError;
use serde::Serialize;

/// One page of results with navigation metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    /// 1-based page number actually returned
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Slice `items` into pages of `page_size` and return page `page` (1-based).
///
/// The requested page is clamped into `[1, total_pages]`; an empty input
/// yields page 1 of 0 with no items.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>, QueryError> {
    if page_size == 0 {
        return Err(QueryError::invalid("page_size", page_size));
    }

    let total = items.len();
    let total_pages = total.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    Ok(Page {
        items: items[start..end].to_vec(),
        total,
        page,
        page_size,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 2, 10).unwrap();
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_page_clamped() {
        let items: Vec<u32> = (1..=25).collect();
        let last = paginate(&items, 99, 10).unwrap();
        assert_eq!(last.page, 3);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(!last.has_next);

        let first = paginate(&items, 0, 10).unwrap();
        assert_eq!(first.page, 1);
        assert!(!first.has_previous);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate::<u32>(&[], 3, 10).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_next && !page.has_previous);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            paginate(&[1, 2, 3], 1, 0),
            Err(QueryError::InvalidInput { field: "page_size", .. })
        ));
    }
}
