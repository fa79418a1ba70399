//! Backend API Bindings
//!
//! Thin wrappers over the gateway client, organized by domain. All calls go
//! through [`client`], which owns credentials and the 401 recovery path.

mod auth;
mod client;
mod items;
mod reviews;
mod users;

pub use client::client;

// Re-export all public items
pub use auth::*;
pub use items::*;
pub use reviews::*;
pub use users::*;
