//! User Profile Endpoints

use crate::error::ApiError;
use crate::models::{UpdateProfileData, User, UserStats};

use super::client;

pub async fn get_user(user_id: &str) -> Result<User, ApiError> {
    client().get(&format!("/users/{user_id}")).await
}

pub async fn update_profile(data: &UpdateProfileData) -> Result<User, ApiError> {
    client().put("/users/me", data).await
}

pub async fn get_user_stats(user_id: &str) -> Result<UserStats, ApiError> {
    client().get(&format!("/users/{user_id}/stats")).await
}
