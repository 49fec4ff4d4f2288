use crate::config::{AppConfig, SenderConfig};
use crate::error::IngestionError;
use crate::ingest;
use crate::models::{
    FilterState, FollowUpView, LoadReport, MailOutcome, Record, SelectionStage,
};
use crate::service::{delay, filter, mailer};
use chrono::NaiveDateTime;

/// 视图中最多带回的告警条数
const MAX_REPORTED_WARNINGS: usize = 20;

/// 催货邮件服务: 导入 -> 延迟 -> 三级筛选 -> 邮件
///
/// 每次调用都是一次完整的重新计算, 不保存任何状态。
pub struct FollowUpService {
    sender: SenderConfig,
    default_min_delay: i64,
}

impl FollowUpService {
    pub fn new(sender: SenderConfig, default_min_delay: i64) -> Self {
        Self {
            sender,
            default_min_delay,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.sender.clone(), config.filter.default_min_delay)
    }

    /// 处理一次上传; 只有导入失败会返回错误
    pub fn run(
        &self,
        export: &[u8],
        state: &FilterState,
        now: NaiveDateTime,
    ) -> Result<FollowUpView, IngestionError> {
        let LoadReport {
            mut records,
            warnings,
        } = ingest::load_export(export)?;

        delay::apply_delays(&mut records, now);
        let mut view = self.evaluate(&records, state);

        view.warning_count = warnings.len();
        view.warnings = warnings.into_iter().take(MAX_REPORTED_WARNINGS).collect();
        Ok(view)
    }

    /// 在已计算延迟的记录上执行三级筛选并生成邮件
    pub fn evaluate(&self, records: &[Record], state: &FilterState) -> FollowUpView {
        let max_delay = delay::max_delay_in_batch(records);
        let threshold = filter::resolve_threshold(state.min_delay, self.default_min_delay, max_delay);

        let delayed = filter::filter_by_delay(records, threshold);
        let summary = filter::summarize(delayed.iter().copied());
        let vendor_candidates = filter::vendor_candidates(delayed.iter().copied());

        let (selection, po_candidates) = filter::resolve_selection(
            state,
            threshold,
            &vendor_candidates,
            |vendor| filter::po_candidates(filter::filter_by_vendor(delayed.iter().copied(), vendor)),
        );

        let mail = match (&selection.supplier, &selection.po) {
            (None, _) => {
                tracing::info!("No vendors delayed at least {} days", threshold);
                MailOutcome::NoSelectionAvailable {
                    stage: SelectionStage::Vendor,
                }
            }
            (Some(vendor), None) => {
                tracing::info!("No POs for vendor {}", vendor);
                MailOutcome::NoSelectionAvailable {
                    stage: SelectionStage::Po,
                }
            }
            (Some(vendor), Some(po)) => {
                let by_vendor = filter::filter_by_vendor(delayed.iter().copied(), vendor);
                let by_po = filter::filter_by_po(by_vendor, po);
                let outcome = mailer::render_mail(&by_po, vendor, po, &self.sender);
                if outcome == MailOutcome::NoMatchingRecords {
                    tracing::warn!("No matching data for vendor {} and PO {}", vendor, po);
                }
                outcome
            }
        };

        FollowUpView {
            records_loaded: records.len(),
            max_delay,
            selection,
            summary,
            vendor_candidates,
            po_candidates,
            mail,
            warning_count: 0,
            warnings: Vec::new(),
        }
    }
}
