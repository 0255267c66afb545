pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod format;
pub mod pages;
pub mod session;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{FileStore, MemoryStore, RecordingNavigator};
pub use api::{ApiClient, ApiRequest, TokenStorage};
pub use config::AppConfig;
pub use session::Session;
pub use utils::error::{FinboardError, Result};
