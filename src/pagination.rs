use serde::Serialize;

/// Page numbers to render in a pagination bar. `None` marks a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_items: usize, page_size: usize) -> Self {
        let current_page = current_page.max(1);
        let total_pages = total_items.div_ceil(page_size.max(1));

        let pages = get_pages(total_pages, current_page, 2, 2, 2, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            total_items,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_for_empty_listing() {
        let page: Paginated<u8> = Paginated::new(vec![], 1, 0, 12);
        assert!(page.pages.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn short_listing_shows_every_page() {
        let page: Paginated<u8> = Paginated::new(vec![], 2, 36, 12);
        assert_eq!(page.pages, vec![Some(1), Some(2), Some(3)]);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn long_listing_collapses_into_gaps() {
        let page: Paginated<u8> = Paginated::new(vec![], 10, 12 * 20, 12);
        assert_eq!(
            page.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn zero_page_is_treated_as_first() {
        let page: Paginated<u8> = Paginated::new(vec![], 0, 5, 12);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
