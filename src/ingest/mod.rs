pub mod cell;
pub mod coerce;
pub mod delimited;
pub mod reader;
pub mod workbook;

pub use reader::{load_export, REQUIRED_COLUMNS};
