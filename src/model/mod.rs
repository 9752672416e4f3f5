// src/model/mod.rs
pub mod risk;
pub mod sheet;

pub use risk::{ClientInfo, ClientRecord, DataQuality, RawRecord, RecordKind, Report, RiskCategory, RiskFactor};
pub use sheet::{CellValue, MergedRegion, Sheet};
