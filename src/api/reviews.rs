//! Review Endpoints

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{CreateReviewData, Review, ReviewsPage};

use super::client;

#[derive(Serialize)]
struct UpdateReviewArgs<'a> {
    rating: u8,
    comment: &'a str,
}

pub async fn create_review(data: &CreateReviewData) -> Result<Review, ApiError> {
    client().post("/reviews", data).await
}

/// Reviews left for a user, one page at a time
pub async fn get_user_reviews(
    user_id: &str,
    page: u32,
    limit: u32,
) -> Result<ReviewsPage, ApiError> {
    client()
        .get(&format!("/reviews/user/{user_id}?page={page}&limit={limit}"))
        .await
}

pub async fn update_review(review_id: &str, rating: u8, comment: &str) -> Result<Review, ApiError> {
    client()
        .put(&format!("/reviews/{review_id}"), &UpdateReviewArgs { rating, comment })
        .await
}

pub async fn delete_review(review_id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/reviews/{review_id}")).await
}
