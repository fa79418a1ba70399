//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Listing ids hearted this session. Local-only UI state: toggling a
    /// heart makes no network call and never affects filtering/pagination.
    pub favorites: Vec<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip the heart on a listing
pub fn store_toggle_favorite(store: &AppStore, item_id: &str) {
    // the subfield must outlive its write guard
    let field = store.favorites();
    let mut favorites = field.write();
    if let Some(pos) = favorites.iter().position(|id| id == item_id) {
        favorites.remove(pos);
    } else {
        favorites.push(item_id.to_string());
    }
}

pub fn store_is_favorite(store: &AppStore, item_id: &str) -> bool {
    let field = store.favorites();
    let favorites = field.read();
    favorites.iter().any(|id| id == item_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes_a_favorite() {
        let store = Store::new(AppState::default());
        store_toggle_favorite(&store, "i-1");
        assert!(store_is_favorite(&store, "i-1"));
        store_toggle_favorite(&store, "i-1");
        assert!(!store_is_favorite(&store, "i-1"));
    }

    #[test]
    fn toggling_one_listing_leaves_others_alone() {
        let store = Store::new(AppState::default());
        store_toggle_favorite(&store, "i-1");
        store_toggle_favorite(&store, "i-2");
        store_toggle_favorite(&store, "i-1");
        assert!(!store_is_favorite(&store, "i-1"));
        assert!(store_is_favorite(&store, "i-2"));
    }
}
