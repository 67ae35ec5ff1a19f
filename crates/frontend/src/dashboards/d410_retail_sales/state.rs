use contracts::dashboards::d410_retail_sales::FilterOptionsResponse;
use contracts::enums::{PageSize, SalesSort, SortKey};
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Everything that determines a `GET /api/sales` request.
///
/// Mutate only through the setters: they keep `page` consistent with the
/// rest of the query and report whether anything changed, so the owning
/// signal can skip notifying subscribers on no-op interactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    search_text: String,
    selected_categories: BTreeSet<String>,
    selected_regions: BTreeSet<String>,
    sort: SalesSort,
    page: u32,
    page_size: PageSize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_page_size(PageSize::default())
    }
}

impl QueryState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            search_text: String::new(),
            selected_categories: BTreeSet::new(),
            selected_regions: BTreeSet::new(),
            sort: SalesSort::default(),
            page: 1,
            page_size,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    pub fn selected_regions(&self) -> &BTreeSet<String> {
        &self.selected_regions
    }

    pub fn sort(&self) -> SalesSort {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn active_filters_count(&self) -> usize {
        let search = usize::from(!self.search_text.is_empty());
        search + self.selected_categories.len() + self.selected_regions.len()
    }

    /// Stores the trimmed text; surrounding whitespace never makes a new query.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into().trim().to_string();
        let changed = self.search_text != text;
        self.search_text = text;
        self.reset_page() || changed
    }

    pub fn toggle_category(&mut self, category: &str) -> bool {
        toggle(&mut self.selected_categories, category);
        self.reset_page();
        true
    }

    pub fn toggle_region(&mut self, region: &str) -> bool {
        toggle(&mut self.selected_regions, region);
        self.reset_page();
        true
    }

    /// Switching to another column starts descending; clicking the active
    /// column flips its direction.
    pub fn set_sort(&mut self, key: SortKey) -> bool {
        self.sort = if self.sort.key == key {
            SalesSort::new(key, self.sort.direction.flipped())
        } else {
            SalesSort::default_for(key)
        };
        self.reset_page();
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        let changed = self.page != page;
        self.page = page;
        changed
    }

    pub fn set_page_size(&mut self, page_size: PageSize) -> bool {
        let changed = self.page_size != page_size;
        self.page_size = page_size;
        self.reset_page() || changed
    }

    /// Pulls `page` back inside `[1, total_pages]` after a response shrank
    /// the result set underneath it.
    pub fn clamp_page(&mut self, total_pages: u32) -> bool {
        let last = total_pages.max(1);
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }

    /// Back to the default query, keeping the chosen page size.
    pub fn reset_filters(&mut self) -> bool {
        let reset = Self::with_page_size(self.page_size);
        let changed = *self != reset;
        *self = reset;
        changed
    }

    fn reset_page(&mut self) -> bool {
        let changed = self.page != 1;
        self.page = 1;
        changed
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Values offered by the category and region filters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub regions: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            categories: ["Electronics", "Clothing", "Food", "Books"]
                .map(String::from)
                .to_vec(),
            regions: ["North", "South", "East", "West"].map(String::from).to_vec(),
        }
    }
}

impl FilterOptions {
    /// Takes the backend's lists, keeping the built-in ones for any list
    /// that came back empty.
    pub fn from_response(response: FilterOptionsResponse) -> Self {
        let fallback = Self::default();
        Self {
            categories: non_empty_or(response.categories, fallback.categories),
            regions: non_empty_or(response.regions, fallback.regions),
        }
    }
}

fn non_empty_or(values: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if values.is_empty() {
        fallback
    } else {
        values
    }
}

// Create state within component scope so it is disposed with the dashboard
pub fn create_state(page_size: PageSize) -> RwSignal<QueryState> {
    RwSignal::new(QueryState::with_page_size(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SortDirection;

    fn on_page_three() -> QueryState {
        let mut state = QueryState::default();
        state.set_page(3);
        state
    }

    #[test]
    fn test_every_mutation_but_set_page_resets_page() {
        let mutations: Vec<Box<dyn Fn(&mut QueryState)>> = vec![
            Box::new(|s| {
                s.set_search_text("lamp");
            }),
            Box::new(|s| {
                s.toggle_category("Books");
            }),
            Box::new(|s| {
                s.toggle_region("West");
            }),
            Box::new(|s| {
                s.set_sort(SortKey::Quantity);
            }),
            Box::new(|s| {
                s.set_page_size(PageSize::Fifty);
            }),
        ];
        for mutate in mutations {
            let mut state = on_page_three();
            mutate(&mut state);
            assert_eq!(state.page(), 1);
        }

        let mut state = on_page_three();
        state.set_page(4);
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn test_repeating_a_value_still_returns_to_first_page() {
        let mut state = on_page_three();
        assert!(state.set_search_text(""));
        assert_eq!(state.page(), 1);
        assert!(!state.set_search_text(""));
    }

    #[test]
    fn test_search_text_is_trimmed() {
        let mut state = QueryState::default();
        assert!(state.set_search_text("lamp"));
        assert!(!state.set_search_text("lamp "));
        assert_eq!(state.search_text(), "lamp");

        assert!(state.set_search_text("   "));
        assert_eq!(state.search_text(), "");
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut state = QueryState::default();
        state.toggle_category("Food");
        let before = state.selected_categories().clone();

        state.toggle_category("Books");
        state.toggle_category("Books");
        assert_eq!(state.selected_categories(), &before);

        state.toggle_region("North");
        assert!(state.selected_regions().contains("North"));
        state.toggle_region("North");
        assert!(state.selected_regions().is_empty());
    }

    #[test]
    fn test_sort_toggle_rules() {
        let mut state = QueryState::default();
        assert_eq!(state.sort().token(), "date_desc");

        state.set_sort(SortKey::Date);
        assert_eq!(state.sort().token(), "date_asc");

        state.set_sort(SortKey::Customer);
        assert_eq!(state.sort().token(), "customer_desc");

        state.set_sort(SortKey::Customer);
        assert_eq!(state.sort().direction, SortDirection::Asc);
    }

    #[test]
    fn test_set_page_keeps_page_positive() {
        let mut state = QueryState::default();
        assert!(!state.set_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_clamp_page_after_result_set_shrinks() {
        let mut state = QueryState::default();
        state.set_page(9);
        assert!(state.clamp_page(4));
        assert_eq!(state.page(), 4);
        assert!(!state.clamp_page(4));

        assert!(state.clamp_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_reset_filters_keeps_page_size() {
        let mut state = QueryState::with_page_size(PageSize::Twenty);
        state.set_search_text("tv");
        state.toggle_region("East");
        state.set_sort(SortKey::Quantity);
        assert_eq!(state.active_filters_count(), 2);

        assert!(state.reset_filters());
        assert_eq!(state, QueryState::with_page_size(PageSize::Twenty));
        assert!(!state.reset_filters());
    }

    #[test]
    fn test_filter_options_fall_back_per_list() {
        let options = FilterOptions::from_response(FilterOptionsResponse {
            categories: vec!["Toys".to_string()],
            regions: Vec::new(),
        });
        assert_eq!(options.categories, vec!["Toys".to_string()]);
        assert_eq!(options.regions, FilterOptions::default().regions);
    }
}
