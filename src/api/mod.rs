pub mod handlers;

pub use handlers::{follow_up, follow_up_upload, health_check};

use crate::service::FollowUpService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建路由
pub fn router(service: Arc<FollowUpService>) -> Router {
    let follow_up_routes = Router::new()
        .route("/api/followup", post(follow_up))
        .route("/api/followup/upload", post(follow_up_upload))
        .with_state(service);

    Router::new()
        .route("/health", get(health_check))
        .merge(follow_up_routes)
}
