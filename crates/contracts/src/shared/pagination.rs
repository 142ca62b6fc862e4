//! Page window over an already filtered list.

/// One page of a list. Pages are 1-based, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Index of the first item on the page.
    pub start: usize,
    /// One past the last item on the page.
    pub end: usize,
}

/// Window for `page` of `total_items`. Out-of-range pages are clamped,
/// `per_page == 0` is treated as 1.
pub fn paginate(total_items: usize, page: usize, per_page: usize) -> PageWindow {
    let per_page = per_page.max(1);
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let start = ((page - 1) * per_page).min(total_items);
    let end = (start + per_page).min(total_items);

    PageWindow {
        page,
        per_page,
        total_items,
        total_pages,
        start,
        end,
    }
}

impl PageWindow {
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Controls are hidden for a single page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} items",
            self.start + 1,
            self.end,
            self.total_items
        )
    }

    pub fn position(&self) -> String {
        format!("{} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let w = paginate(8, 1, 3);
        assert_eq!(w.total_pages, 3);
        assert_eq!((w.start, w.end), (0, 3));
        assert!(!w.has_prev());
        assert!(w.has_next());
        assert_eq!(w.summary(), "Showing 1 to 3 of 8 items");
        assert_eq!(w.position(), "1 of 3");
    }

    #[test]
    fn test_last_partial_page() {
        let w = paginate(8, 3, 3);
        assert_eq!((w.start, w.end), (6, 8));
        assert!(!w.has_next());
        let items: Vec<u32> = (0..8).collect();
        assert_eq!(w.slice(&items), &[6, 7]);
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(paginate(8, 9, 4).page, 2);
        assert_eq!(paginate(8, 0, 4).page, 1);
    }

    #[test]
    fn test_hidden_for_single_page() {
        assert!(!paginate(4, 1, 4).is_visible());
        assert!(paginate(5, 1, 4).is_visible());
        let empty = paginate(0, 1, 4);
        assert!(!empty.is_visible());
        assert_eq!(empty.total_pages, 0);
        assert_eq!((empty.start, empty.end), (0, 0));
        let items: Vec<u32> = Vec::new();
        assert!(empty.slice(&items).is_empty());
    }

    #[test]
    fn test_zero_per_page() {
        let w = paginate(3, 1, 0);
        assert_eq!(w.per_page, 1);
        assert_eq!(w.total_pages, 3);
    }
}
