use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 文本型标识符 (采购单号等)
///
/// 看起来像数字的单号也只按文本比较, 排序为字典序。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 采购订单行 (ME2L 导出的一行)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub purchasing_document: Option<Identifier>, // 采购单号
    pub supplier_name: Option<String>,           // 供应商
    pub document_date: Option<NaiveDateTime>,    // 单据日期
    pub delay_days: Option<i64>,                 // 延迟天数 (派生)
    pub short_text: Option<String>,              // 物料描述
    pub pending_qty: Option<BigDecimal>,         // 待交货数量
    pub order_unit: Option<String>,              // 单位
}

impl Record {
    /// 是否满足延迟阈值; 日期缺失时任何阈值都不满足
    pub fn is_delayed_at_least(&self, threshold: i64) -> bool {
        matches!(self.delay_days, Some(d) if d >= threshold)
    }
}

/// 导入结果: 记录 + 非致命的单元格告警
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub warnings: Vec<crate::error::FieldCoercionWarning>,
}
