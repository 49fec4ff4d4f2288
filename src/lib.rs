pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use error::{FieldCoercionWarning, IngestionError};
pub use service::FollowUpService;
