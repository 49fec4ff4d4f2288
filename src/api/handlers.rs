use crate::models::{FilterState, FollowUpView};
use crate::service::FollowUpService;
use axum::{
    body::Bytes,
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 请求体: ME2L 导出文本 + 当前筛选状态
#[derive(Debug, Deserialize)]
pub struct FollowUpRequest {
    pub export: String,
    #[serde(default)]
    pub filter: FilterState,
}

/// 响应体
#[derive(Debug, Serialize)]
pub struct FollowUpResponse {
    pub success: bool,
    pub message: String,
    pub view: Option<FollowUpView>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// JSON 接口: 导出内容放在请求体中
pub async fn follow_up(
    State(service): State<Arc<FollowUpService>>,
    Json(req): Json<FollowUpRequest>,
) -> Response {
    respond(&service, req.export.as_bytes(), &req.filter)
}

/// 上传接口: 请求体是原始 CSV, 筛选条件在查询参数中
pub async fn follow_up_upload(
    State(service): State<Arc<FollowUpService>>,
    Query(filter): Query<FilterState>,
    body: Bytes,
) -> Response {
    respond(&service, &body, &filter)
}

fn respond(service: &FollowUpService, export: &[u8], filter: &FilterState) -> Response {
    // 每次请求使用一个统一的参考时间
    let now = Local::now().naive_local();

    match service.run(export, filter, now) {
        Ok(view) => {
            let response = FollowUpResponse {
                success: true,
                message: view.mail.message(),
                view: Some(view),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Upload rejected: {}", e);
            let response = FollowUpResponse {
                success: false,
                message: e.to_string(),
                view: None,
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
        }
    }
}
