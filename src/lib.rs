// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod diag;
pub mod error;
pub mod model;
pub mod source;
pub mod specs;
pub mod scrape;

pub mod cli;
pub mod file;
pub mod params;
pub mod runner;
#[cfg(feature = "gui")]
pub mod gui;

pub use config::{ExtractOptions, TemplateKind, TemplateLayout};
pub use crate::core::Rating;
pub use diag::{Collector, Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use error::{Error, Result};
pub use model::{ClientRecord, Report, RiskCategory, RiskFactor};
pub use scrape::{process_excel_file, process_workbook, try_process_excel_file};
pub use source::{CalamineWorkbook, InMemoryWorkbook, WorkbookSource};
