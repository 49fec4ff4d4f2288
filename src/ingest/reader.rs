use super::cell::{Cell, Table};
use super::{coerce, delimited, workbook};
use crate::error::{FieldCoercionWarning, IngestionError};
use crate::models::{Identifier, LoadReport, Record};
use indexmap::IndexMap;

pub const COL_DOCUMENT_DATE: &str = "Document Date";
pub const COL_PENDING_QTY: &str = "Still to be delivered (qty)";
pub const COL_PURCHASING_DOCUMENT: &str = "Purchasing Document";
pub const COL_SUPPLIER: &str = "Name of Supplier";
pub const COL_SHORT_TEXT: &str = "Short Text";
pub const COL_ORDER_UNIT: &str = "Order Unit";

/// ME2L 导出必须包含的列
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_DOCUMENT_DATE,
    COL_PENDING_QTY,
    COL_PURCHASING_DOCUMENT,
    COL_SUPPLIER,
    COL_SHORT_TEXT,
    COL_ORDER_UNIT,
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

static EMPTY_CELL: Cell = Cell::Empty;

/// 读取 ME2L 导出 (xlsx 或 CSV), 生成采购订单行
///
/// 只有结构性问题 (空文件, 缺列, 无法解析的文件或表头) 会返回错误;
/// 单元格级别的问题记为告警, 对应字段置为缺失。
pub fn load_export(input: &[u8]) -> Result<LoadReport, IngestionError> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    if input.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestionError::EmptyInput);
    }

    let table = if workbook::is_workbook(input) {
        workbook::read_table(input)?
    } else {
        delimited::read_table(input)?
    };
    let columns = resolve_columns(&table.headers)?;

    let mut report = LoadReport::default();
    let Table { rows, .. } = table;
    for (idx, row) in rows.iter().enumerate() {
        let record = read_row(idx + 1, row, &columns, &mut report.warnings);
        report.records.push(record);
    }

    tracing::info!(
        "Loaded {} rows from export ({} cell warnings)",
        report.records.len(),
        report.warnings.len()
    );
    log_warning_summary(&report.warnings);

    Ok(report)
}

fn resolve_columns(headers: &[String]) -> Result<IndexMap<&'static str, usize>, IngestionError> {
    let mut columns = IndexMap::new();
    let mut missing = Vec::new();

    for name in REQUIRED_COLUMNS {
        match headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
        {
            Some(idx) => {
                columns.insert(name, idx);
            }
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(IngestionError::MissingColumns(missing));
    }
    Ok(columns)
}

fn read_row(
    row_no: usize,
    row: &[Cell],
    columns: &IndexMap<&'static str, usize>,
    warnings: &mut Vec<FieldCoercionWarning>,
) -> Record {
    let cell = |name: &'static str| {
        columns
            .get(name)
            .and_then(|&idx| row.get(idx))
            .unwrap_or(&EMPTY_CELL)
    };

    // 非空但无法解析, 或者不是合法 UTF-8 的单元格记一条告警
    let mut note = |column: &'static str, parsed: bool| {
        let value = cell(column);
        if !value.is_blank() && (!parsed || value.is_garbled()) {
            warnings.push(FieldCoercionWarning {
                row: row_no,
                column,
                value: value.display(),
            });
        }
    };

    let document_date = coerce::date_cell(cell(COL_DOCUMENT_DATE));
    note(COL_DOCUMENT_DATE, document_date.is_some());

    let pending_qty = coerce::quantity_cell(cell(COL_PENDING_QTY));
    note(COL_PENDING_QTY, pending_qty.is_some());

    for column in [COL_PURCHASING_DOCUMENT, COL_SUPPLIER, COL_SHORT_TEXT, COL_ORDER_UNIT] {
        note(column, true);
    }

    Record {
        purchasing_document: coerce::text_cell(cell(COL_PURCHASING_DOCUMENT)).map(Identifier::new),
        supplier_name: coerce::text_cell(cell(COL_SUPPLIER)),
        document_date,
        delay_days: None,
        short_text: coerce::text_cell(cell(COL_SHORT_TEXT)),
        pending_qty,
        order_unit: coerce::text_cell(cell(COL_ORDER_UNIT)),
    }
}

fn log_warning_summary(warnings: &[FieldCoercionWarning]) {
    let mut per_column: IndexMap<&'static str, usize> = IndexMap::new();
    for w in warnings {
        *per_column.entry(w.column).or_insert(0) += 1;
    }
    for (column, count) in per_column {
        tracing::warn!("{} unreadable values in column '{}' treated as missing", count, column);
    }
}
