use super::cell::{Cell, Table};
use crate::error::IngestionError;
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use std::io::Cursor;

/// xlsx 文件 (zip 容器) 的文件头
pub const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

pub fn is_workbook(input: &[u8]) -> bool {
    input.starts_with(ZIP_MAGIC)
}

/// 读取 ME2L Excel 导出的第一个工作表
pub fn read_table(input: &[u8]) -> Result<Table, IngestionError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(input))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestionError::NoWorksheet)??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestionError::EmptyInput);
    };

    let headers = header_row.iter().map(|c| c.to_string().trim().to_string()).collect();
    let rows = rows.map(|row| row.iter().map(to_cell).collect()).collect();

    Ok(Table { headers, rows })
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            if s.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Number(dt.as_f64())),
        // #N/A 之类的错误单元格按文本处理, 之后解析失败记为告警
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}
