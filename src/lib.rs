pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::config::ThumbnailConfig;
pub use crate::error::ThumbnailError;
pub use crate::models::{ThumbnailOutcome, TriggerEvent};
pub use crate::services::thumbnail_service::ThumbnailService;
