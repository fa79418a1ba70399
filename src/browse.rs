//! Listing Browse Pipeline
//!
//! Pure state behind the browse page: local filters over the fetched
//! listing set and the incremental pagination window. Components own the
//! signals; everything here is synchronous and side-effect free.

use crate::models::Item;

/// Listings revealed per load-more step
pub const PAGE_SIZE: usize = 12;

/// Sentinel select value meaning "no filtering on this field"
pub const ALL: &str = "all";

/// Lifecycle of the one-shot collection fetch
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState {
    Loading,
    Ready,
    Error(String),
}

/// Sort selection carried with the filters. The backend returns listings
/// newest-first, so ordering is left untouched client-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Closest,
    BestCondition,
}

/// Current search/category/size/condition selections
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    pub sort: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            size: ALL.to_string(),
            condition: ALL.to_string(),
            sort: SortOrder::default(),
        }
    }
}

impl FilterState {
    /// True when nothing is filtered; distinguishes "no listings exist"
    /// from "no results for these filters"
    pub fn is_default(&self) -> bool {
        self.search.trim().is_empty()
            && self.category == ALL
            && self.size == ALL
            && self.condition == ALL
    }

    fn matches(&self, item: &Item) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty() {
            let brand = item.brand.as_deref().unwrap_or("");
            let hit = item.title.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
                || item.category.to_lowercase().contains(&query)
                || brand.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        if self.category != ALL && !item.category.eq_ignore_ascii_case(&self.category) {
            return false;
        }
        if self.size != ALL && !item.size.eq_ignore_ascii_case(&self.size) {
            return false;
        }
        if self.condition != ALL && !item.condition.eq_ignore_ascii_case(&self.condition) {
            return false;
        }
        true
    }
}

/// Filter the fetched set. Pure and idempotent: the input is never mutated
/// and predicates compose with logical AND.
pub fn apply_filters(items: &[Item], filters: &FilterState) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filters.matches(item))
        .cloned()
        .collect()
}

/// How many of the filtered results are currently revealed.
///
/// Resets to one page whenever the filters change and only ever advances
/// through the guarded load-more pair, so the displayed count can never
/// reference an index past the filtered set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaginationWindow {
    items_to_show: usize,
    is_loading_more: bool,
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationWindow {
    pub fn new() -> Self {
        Self {
            items_to_show: PAGE_SIZE,
            is_loading_more: false,
        }
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    /// Back to the first page; called on every filter change
    pub fn reset(&mut self) {
        self.items_to_show = PAGE_SIZE;
        self.is_loading_more = false;
    }

    /// Displayed count, always <= the filtered count
    pub fn visible_count(&self, filtered_len: usize) -> usize {
        self.items_to_show.min(filtered_len)
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.visible_count(filtered_len) < filtered_len
    }

    /// Begin a load-more step. Returns false (and does nothing) when one is
    /// already in flight or everything is shown, so rapid repeated triggers
    /// collapse to a single increment.
    pub fn start_load_more(&mut self, filtered_len: usize) -> bool {
        if self.is_loading_more || !self.has_more(filtered_len) {
            return false;
        }
        self.is_loading_more = true;
        true
    }

    /// Finish the step started by `start_load_more`: advance one page,
    /// clamped to the filtered count.
    pub fn complete_load_more(&mut self, filtered_len: usize) {
        self.items_to_show = (self.items_to_show + PAGE_SIZE).min(filtered_len);
        self.is_loading_more = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemOwner;

    fn listing(id: &str, title: &str, category: &str, size: &str, condition: &str) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} in good shape"),
            brand: None,
            category: category.to_string(),
            size: size.to_string(),
            condition: condition.to_string(),
            color: None,
            measurement_chest: None,
            measurement_length: None,
            measurement_sleeves: None,
            images: vec![],
            pickup_location: "Downtown".to_string(),
            pickup_instructions: None,
            availability: vec![],
            meeting_preference: None,
            status: "available".to_string(),
            views: 0,
            interested_count: 0,
            user_id: "u-1".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            user: ItemOwner::default(),
        }
    }

    fn thirty_listings() -> Vec<Item> {
        (0..30)
            .map(|n| listing(&format!("i-{n}"), &format!("Item {n}"), "Tops", "M", "Good"))
            .collect()
    }

    #[test]
    fn apply_filters_is_idempotent() {
        let items = thirty_listings();
        let filters = FilterState {
            search: "item 1".to_string(),
            ..Default::default()
        };
        let once = apply_filters(&items, &filters);
        let twice = apply_filters(&once, &filters);
        assert_eq!(once, twice);
        assert!(!once.is_empty());
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let mut items: Vec<Item> = (0..9)
            .map(|n| listing(&format!("i-{n}"), &format!("Plain Tee {n}"), "Tops", "S", "Good"))
            .collect();
        items.push(listing("i-d", "Vintage Denim Jacket", "Jackets", "M", "Like New"));

        let filters = FilterState {
            search: "denim".to_string(),
            ..Default::default()
        };
        let filtered = apply_filters(&items, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "i-d");
    }

    #[test]
    fn search_also_covers_description_category_and_brand() {
        let mut branded = listing("i-b", "Runner", "Shoes", "9", "Good");
        branded.brand = Some("Nike".to_string());
        branded.description = "lightly used".to_string();
        let items = vec![branded, listing("i-o", "Coat", "Jackets", "L", "Good")];

        let by_brand = FilterState {
            search: "nike".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&items, &by_brand).len(), 1);

        let by_category = FilterState {
            search: "shoes".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&items, &by_category).len(), 1);
    }

    #[test]
    fn select_filters_compose_with_and() {
        let items = vec![
            listing("a", "Boots", "Shoes", "M", "Good"),
            listing("b", "Sneakers", "Shoes", "L", "Good"),
            listing("c", "Sweater", "Tops", "M", "Good"),
        ];
        let filters = FilterState {
            category: "shoes".to_string(),
            size: "m".to_string(),
            ..Default::default()
        };
        let filtered = apply_filters(&items, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");
    }

    #[test]
    fn default_filters_keep_everything() {
        let items = thirty_listings();
        assert_eq!(apply_filters(&items, &FilterState::default()).len(), 30);
    }

    #[test]
    fn is_default_distinguishes_the_empty_states() {
        assert!(FilterState::default().is_default());
        let filtered = FilterState {
            category: "shoes".to_string(),
            ..Default::default()
        };
        assert!(!filtered.is_default());
        // sort alone does not make the set look filtered
        let sorted = FilterState {
            sort: SortOrder::BestCondition,
            ..Default::default()
        };
        assert!(sorted.is_default());
    }

    #[test]
    fn window_reset_returns_to_one_page() {
        let mut window = PaginationWindow::new();
        assert!(window.start_load_more(30));
        window.complete_load_more(30);
        assert_eq!(window.visible_count(30), 24);

        window.reset();
        assert_eq!(window.visible_count(30), PAGE_SIZE);
        assert!(!window.is_loading_more());
    }

    #[test]
    fn load_more_walks_30_items_and_clamps() {
        let mut window = PaginationWindow::new();
        assert_eq!(window.visible_count(30), 12);

        assert!(window.start_load_more(30));
        window.complete_load_more(30);
        assert_eq!(window.visible_count(30), 24);

        assert!(window.start_load_more(30));
        window.complete_load_more(30);
        // clamped to the filtered count, not 36
        assert_eq!(window.visible_count(30), 30);

        // everything shown: further triggers are no-ops
        assert!(!window.start_load_more(30));
        assert_eq!(window.visible_count(30), 30);
    }

    #[test]
    fn double_trigger_before_completion_increments_once() {
        let mut window = PaginationWindow::new();
        assert!(window.start_load_more(30));
        assert!(!window.start_load_more(30));
        window.complete_load_more(30);
        assert_eq!(window.visible_count(30), 24);
        assert!(!window.is_loading_more());
    }

    #[test]
    fn visible_count_never_exceeds_filtered_count() {
        let window = PaginationWindow::new();
        assert_eq!(window.visible_count(5), 5);
        assert_eq!(window.visible_count(0), 0);
        assert!(!window.has_more(5));
    }
}
