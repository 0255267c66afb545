pub mod client;
pub mod endpoints;
pub mod resources;
pub mod tokens;

pub use client::{ApiClient, ApiRequest};
pub use tokens::TokenStorage;
