use super::Identifier;
use serde::{Deserialize, Serialize};

/// 展示层持有的筛选状态 (按值传入核心函数)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub min_delay: Option<i64>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub po: Option<Identifier>,
}

/// 与候选列表一致化之后的选择
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub min_delay: i64,
    pub supplier: Option<String>,
    pub po: Option<Identifier>,
}

/// 延迟筛选后的汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub distinct_vendor_count: usize,
    pub distinct_po_count: usize,
}
