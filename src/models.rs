//! Frontend Models
//!
//! Data structures matching backend entities. The backend speaks camelCase
//! JSON, so everything here is renamed accordingly.

use serde::{Deserialize, Serialize};

/// A shareable clothing listing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    pub size: String,
    pub condition: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub measurement_chest: Option<String>,
    #[serde(default)]
    pub measurement_length: Option<String>,
    #[serde(default)]
    pub measurement_sleeves: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub pickup_location: String,
    #[serde(default)]
    pub pickup_instructions: Option<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub meeting_preference: Option<String>,
    /// "available" or "claimed"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub interested_count: u32,
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub user: ItemOwner,
}

/// Owner summary embedded in a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOwner {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Payload for POST /items
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub description: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_chest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_sleeves: Option<String>,
    pub images: Vec<String>,
    pub pickup_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    pub availability: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_preference: Option<String>,
}

/// Partial payload for PUT /items/:id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Server-side query filters for GET /items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilters {
    pub category: Option<String>,
    pub size: Option<String>,
    pub condition: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
}

/// Authenticated user profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub items_shared_count: u32,
    #[serde(default)]
    pub items_claimed_count: u32,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub profile_visibility: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// Name to show in the UI, falling back to the email local part
    pub fn shown_name(&self) -> String {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        self.email
            .split('@')
            .next()
            .unwrap_or("Anonymous")
            .to_string()
    }
}

/// Payload for PUT /users/me
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_visibility: Option<String>,
}

/// GET /users/:id/stats
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub items_shared_count: u32,
    #[serde(default)]
    pub items_claimed_count: u32,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
}

/// Review of a user (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub helpful_count: u32,
    pub reviewer_id: String,
    pub reviewed_user_id: String,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub reviewer: ItemOwner,
}

/// Payload for POST /reviews
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewData {
    pub rating: u8,
    pub comment: String,
    pub reviewed_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

/// Paginated reviews envelope from GET /reviews/user/:id
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsPage {
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Credentials for POST /auth/signup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Credentials for POST /auth/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Tokens + user returned by login and signup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}
