/// Page navigation bounded by the last known page count.
///
/// Every method returns the page to switch to, or `None` when the
/// interaction must not change anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    page: u32,
    total_pages: u32,
}

impl PageBounds {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page: page.max(1),
            total_pages: total_pages.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev(&self) -> Option<u32> {
        self.can_prev().then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.can_next().then(|| self.page + 1)
    }

    pub fn first(&self) -> Option<u32> {
        self.jump(1)
    }

    pub fn last(&self) -> Option<u32> {
        self.jump(self.total_pages)
    }

    /// Direct jump, clamped to `[1, total_pages]`
    pub fn jump(&self, target: u32) -> Option<u32> {
        let target = target.clamp(1, self.total_pages);
        (target != self.page).then_some(target)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let bounds = PageBounds::new(1, 5);
        assert!(!bounds.can_prev());
        assert_eq!(bounds.prev(), None);
        assert_eq!(bounds.first(), None);
        assert_eq!(bounds.next(), Some(2));
    }

    #[test]
    fn test_next_on_last_page_is_noop() {
        let bounds = PageBounds::new(5, 5);
        assert!(!bounds.can_next());
        assert_eq!(bounds.next(), None);
        assert_eq!(bounds.last(), None);
        assert_eq!(bounds.prev(), Some(4));
    }

    #[test]
    fn test_single_page_disables_both_directions() {
        let bounds = PageBounds::new(1, 0);
        assert_eq!(bounds.total_pages(), 1);
        assert!(!bounds.can_prev());
        assert!(!bounds.can_next());
    }

    #[test]
    fn test_jump_is_clamped() {
        let bounds = PageBounds::new(2, 7);
        assert_eq!(bounds.jump(0), Some(1));
        assert_eq!(bounds.jump(99), Some(7));
        assert_eq!(bounds.jump(2), None);
        assert_eq!(bounds.jump(5), Some(5));
    }

    #[test]
    fn test_label() {
        assert_eq!(PageBounds::new(3, 12).label(), "Page 3 of 12");
    }
}
