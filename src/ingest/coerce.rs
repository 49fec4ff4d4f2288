use super::cell::Cell;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use std::str::FromStr;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// 仅日期的值按当天 00:00 处理
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y", "%d-%b-%Y"];

/// 去空白后的非空文本
pub fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 解析单据日期, 无法识别时返回 None
pub fn document_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// 解析待交货数量 (精确十进制)
pub fn quantity(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim()).ok()
}

/// 文本字段: 数字按显示文本处理
pub fn text_cell(cell: &Cell) -> Option<String> {
    text(&cell.display())
}

/// 日期字段: Excel 日期直接使用, 文本按已知格式解析
pub fn date_cell(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(s) | Cell::Garbled(s) => document_date(s),
        Cell::Empty | Cell::Number(_) => None,
    }
}

/// 数量字段
pub fn quantity_cell(cell: &Cell) -> Option<BigDecimal> {
    match cell {
        Cell::Text(s) | Cell::Garbled(s) => quantity(s),
        Cell::Number(n) => quantity(&n.to_string()),
        Cell::Empty | Cell::DateTime(_) => None,
    }
}
