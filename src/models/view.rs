use super::{Identifier, MailOutcome, Selection, Summary};
use crate::error::FieldCoercionWarning;
use serde::Serialize;

/// 一次上传 + 筛选的完整计算结果 (交给展示层)
#[derive(Debug, Clone, Serialize)]
pub struct FollowUpView {
    pub records_loaded: usize,
    pub max_delay: i64, // 延迟阈值的上界
    pub selection: Selection,
    pub summary: Summary,
    pub vendor_candidates: Vec<String>,
    pub po_candidates: Vec<Identifier>,
    pub mail: MailOutcome,
    pub warning_count: usize,
    pub warnings: Vec<FieldCoercionWarning>, // 仅前若干条
}
