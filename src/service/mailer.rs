use crate::config::SenderConfig;
use crate::models::{Identifier, MailDraft, MailOutcome, Record};
use bigdecimal::ToPrimitive;

const DOC_DATE_FORMAT: &str = "%d-%b-%Y";

/// 根据最终筛选结果 (延迟 + 供应商 + 采购单) 生成催货邮件
///
/// 结果为空时返回 `NoMatchingRecords`。纯函数, 相同输入得到相同文本。
pub fn render_mail(
    records: &[&Record],
    vendor: &str,
    po: &Identifier,
    sender: &SenderConfig,
) -> MailOutcome {
    let Some(first) = records.first() else {
        return MailOutcome::NoMatchingRecords;
    };

    let doc_date = first
        .document_date
        .map(|d| d.format(DOC_DATE_FORMAT).to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    let delay_days = records.iter().filter_map(|r| r.delay_days).max().unwrap_or(0);
    let item_lines: Vec<String> = records.iter().copied().filter_map(item_line).collect();

    let subject = format!("Follow-up on Outstanding Delivery for PO {}", po);
    let text = format!(
        "Subject: {subject}\n\
         \n\
         Dear Supplier ({vendor}),\n\
         \n\
         We wish to bring to your attention that the following items under Purchase Order **{po}**, dated **{doc_date}**, are still pending delivery:\n\
         \n\
         {items}\n\
         \n\
         It has been over **{delay_days} days** since the PO was issued. We kindly request your immediate attention to expedite the dispatch and share a revised delivery schedule.\n\
         \n\
         Please treat this as a priority.\n\
         \n\
         Appreciate your cooperation.\n\
         \n\
         Best regards,  \n\
         {name}  \n\
         {title}  \n\
         {company}\n",
        items = item_lines.join("\n"),
        name = sender.name,
        title = sender.title,
        company = sender.company,
    );

    MailOutcome::Draft(MailDraft {
        subject,
        vendor: vendor.to_string(),
        po: po.clone(),
        doc_date,
        delay_days,
        item_lines,
        text,
    })
}

/// 单行物料; 描述或数量缺失 (或数量无法取整) 时跳过
fn item_line(record: &Record) -> Option<String> {
    let short_text = record.short_text.as_deref()?;
    // 向零截断
    let qty = record.pending_qty.as_ref()?.with_scale(0).to_i64()?;
    let line = match record.order_unit.as_deref() {
        Some(unit) => format!("- {} — Pending: {} {}", short_text, qty, unit),
        None => format!("- {} — Pending: {}", short_text, qty),
    };
    Some(line)
}
