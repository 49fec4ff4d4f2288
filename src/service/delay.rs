use crate::models::Record;
use chrono::NaiveDateTime;

const SECONDS_PER_DAY: i64 = 86_400;

/// 延迟天数 = floor((now - document_date) / 1天)
pub fn delay_days(now: NaiveDateTime, document_date: NaiveDateTime) -> i64 {
    (now - document_date).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// 用同一个 now 为整批记录重新计算延迟天数
pub fn apply_delays(records: &mut [Record], now: NaiveDateTime) {
    for record in records {
        record.delay_days = record.document_date.map(|d| delay_days(now, d));
    }
}

/// 整批记录的最大延迟 (延迟阈值的上界); 空批次或无有效日期时为 0
pub fn max_delay_in_batch(records: &[Record]) -> i64 {
    records
        .iter()
        .filter_map(|r| r.delay_days)
        .max()
        .unwrap_or(0)
        .max(0)
}
