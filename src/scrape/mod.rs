// src/scrape/mod.rs
pub mod aggregate;
pub mod workbook;

pub use aggregate::{escalate, process_risk_table};
pub use workbook::{placeholder_client, process_excel_file, process_sheet, process_workbook, try_process_excel_file};
