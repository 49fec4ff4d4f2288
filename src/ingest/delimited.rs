use super::cell::{Cell, Table};
use crate::error::IngestionError;
use csv::ReaderBuilder;

/// 读取 CSV 导出
///
/// 表头必须是合法 UTF-8 (结构性问题); 数据单元格按字节读取,
/// 非 UTF-8 的单元格有损解码为 `Cell::Garbled`, 不会中断导入。
pub fn read_table(input: &[u8]) -> Result<Table, IngestionError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(sniff_delimiter(input))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for row in reader.byte_records() {
        let row = row?;
        rows.push(row.iter().map(decode_cell).collect());
    }

    Ok(Table { headers, rows })
}

fn decode_cell(raw: &[u8]) -> Cell {
    match std::str::from_utf8(raw) {
        Ok(s) if s.trim().is_empty() => Cell::Empty,
        Ok(s) => Cell::Text(s.to_string()),
        Err(_) => Cell::Garbled(String::from_utf8_lossy(raw).into_owned()),
    }
}

/// 根据表头第一行判断分隔符 (逗号, 分号, 制表符)
fn sniff_delimiter(input: &[u8]) -> u8 {
    let first_line = input.split(|b| *b == b'\n').next().unwrap_or_default();
    [b',', b';', b'\t']
        .into_iter()
        .max_by_key(|d| {
            // 平局时优先逗号
            let count = first_line.iter().filter(|b| *b == d).count();
            (count, *d == b',')
        })
        .unwrap_or(b',')
}
