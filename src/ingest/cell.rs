use chrono::NaiveDateTime;

/// 导出中的单元格 (CSV 文本或 Excel 类型化的值)
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Garbled(String), // 非 UTF-8 字节, 已有损解码
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) | Cell::Garbled(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::DateTime(_) => false,
        }
    }

    pub fn is_garbled(&self) -> bool {
        matches!(self, Cell::Garbled(_))
    }

    /// 单元格的显示文本; 整数值不带小数部分 (采购单号常以数字存储)
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) | Cell::Garbled(s) => s.trim().to_string(),
            Cell::Number(n) => format_number(*n),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// 表头 + 数据行, 与来源格式无关
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}
