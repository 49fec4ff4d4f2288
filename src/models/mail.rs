use super::Identifier;
use serde::{Deserialize, Serialize};

/// 生成的催货邮件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDraft {
    pub subject: String,
    pub vendor: String,
    pub po: Identifier,
    pub doc_date: String,   // DD-Mon-YYYY
    pub delay_days: i64,    // 该 PO 各行中的最大延迟
    pub item_lines: Vec<String>,
    pub text: String,
}

/// 无法继续选择的筛选阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    Vendor,
    Po,
}

impl SelectionStage {
    pub fn message(&self) -> &'static str {
        match self {
            SelectionStage::Vendor => "No matching vendors",
            SelectionStage::Po => "No POs for selected vendor",
        }
    }
}

/// 邮件生成结果; 后两种是正常的提示状态, 不是错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MailOutcome {
    Draft(MailDraft),
    NoSelectionAvailable { stage: SelectionStage },
    NoMatchingRecords,
}

impl MailOutcome {
    pub fn draft(&self) -> Option<&MailDraft> {
        match self {
            MailOutcome::Draft(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            MailOutcome::Draft(draft) => format!("Generated follow-up mail for PO {}", draft.po),
            MailOutcome::NoSelectionAvailable { stage } => stage.message().to_string(),
            MailOutcome::NoMatchingRecords => {
                "No matching data for selected vendor and PO.".to_string()
            }
        }
    }
}
