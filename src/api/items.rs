//! Item Endpoints
//!
//! Listing CRUD plus the filtered collection fetch backing the browse page.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ApiError;
use crate::models::{CreateItemData, Item, ItemFilters, UpdateItemData};

use super::client;

/// Characters escaped in query values
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// List items; the `"all"` sentinel and empty search are not sent upstream
pub async fn get_items(filters: &ItemFilters) -> Result<Vec<Item>, ApiError> {
    let path = format!("/items{}", query_string(filters));
    client().get(&path).await
}

pub async fn get_item(id: &str) -> Result<Item, ApiError> {
    client().get(&format!("/items/{id}")).await
}

pub async fn create_item(data: &CreateItemData) -> Result<Item, ApiError> {
    client().post("/items", data).await
}

pub async fn update_item(id: &str, data: &UpdateItemData) -> Result<Item, ApiError> {
    client().put(&format!("/items/{id}"), data).await
}

pub async fn delete_item(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/items/{id}")).await
}

/// Current user's posted items
pub async fn get_my_items() -> Result<Vec<Item>, ApiError> {
    client().get("/items/my/items").await
}

fn query_string(filters: &ItemFilters) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();

    if let Some(category) = selected(&filters.category) {
        pairs.push(("category", category));
    }
    if let Some(size) = selected(&filters.size) {
        pairs.push(("size", size));
    }
    if let Some(condition) = selected(&filters.condition) {
        pairs.push(("condition", condition));
    }
    if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
        pairs.push(("search", search));
    }
    if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(("status", status));
    }

    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

/// A select value counts only when present and not the `"all"` sentinel
fn selected(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_query() {
        assert_eq!(query_string(&ItemFilters::default()), "");
    }

    #[test]
    fn all_sentinel_is_not_sent_upstream() {
        let filters = ItemFilters {
            category: Some("all".to_string()),
            size: Some("M".to_string()),
            ..Default::default()
        };
        assert_eq!(query_string(&filters), "?size=M");
    }

    #[test]
    fn search_text_is_escaped() {
        let filters = ItemFilters {
            search: Some("denim jacket".to_string()),
            status: Some("available".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query_string(&filters),
            "?search=denim%20jacket&status=available"
        );
    }

    #[test]
    fn blank_search_is_skipped() {
        let filters = ItemFilters {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query_string(&filters), "");
    }
}
