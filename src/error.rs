use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 导入失败 (唯一会中断流程的错误)
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Error processing file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error processing file: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("Error processing file: the workbook has no worksheet")]
    NoWorksheet,

    #[error("Error processing file: the export is empty")]
    EmptyInput,

    #[error("Error processing file: missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// 单元格转换失败 (非致命, 该字段视为缺失)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCoercionWarning {
    pub row: usize, // 数据行号, 从 1 开始, 不含表头
    pub column: &'static str,
    pub value: String,
}

impl fmt::Display for FieldCoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: could not read '{}' as {}",
            self.row, self.value, self.column
        )
    }
}
