//! Auth Endpoints
//!
//! Login, signup and session management. Token storage happens in the
//! auth context, not here.

use crate::error::ApiError;
use crate::models::{AuthResponse, LoginData, SignUpData, User};

use super::client;

pub async fn sign_up(data: &SignUpData) -> Result<AuthResponse, ApiError> {
    client().post("/auth/signup", data).await
}

pub async fn login(data: &LoginData) -> Result<AuthResponse, ApiError> {
    client().post("/auth/login", data).await
}

/// Fetch the user behind the stored access token
pub async fn get_current_user() -> Result<User, ApiError> {
    client().get("/auth/me").await
}

/// Invalidate the server-side session
pub async fn logout() -> Result<(), ApiError> {
    client().post_empty("/auth/logout").await
}
