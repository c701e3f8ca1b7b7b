//! JSON listing endpoint.

pub mod error;
pub mod handlers;
pub mod models;

pub use handlers::list_posts;
