// src/source.rs
//! Where sheets come from. The pipeline only sees `model::Sheet`; calamine
//! stays behind `CalamineWorkbook`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Dimensions, Range, Reader, Sheets};
use chrono::{NaiveDate, NaiveDateTime};

use crate::core::dates::serial_to_datetime;
use crate::error::{Error, Result};
use crate::model::{CellValue, MergedRegion, Sheet};

pub trait WorkbookSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    fn load_sheet(&mut self, name: &str) -> Result<Sheet>;
}

/// Any format calamine can open: xlsx, xlsm, xlsb, xls, ods.
pub struct CalamineWorkbook {
    inner: Sheets<BufReader<File>>,
}

impl CalamineWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let mut inner = open_workbook_auto(path)
            .map_err(|source| Error::Open { path: path.to_path_buf(), source })?;
        if let Sheets::Xlsx(xlsx) = &mut inner {
            // Without the regions every cell reads directly; still usable.
            if let Err(e) = xlsx.load_merged_regions() {
                loge!("{}: cannot load merged regions: {e}", path.display());
            }
        }
        logd!("opened {}", path.display());
        Ok(Self { inner })
    }

    fn merge_cells(&mut self, name: &str) -> Vec<Dimensions> {
        match &mut self.inner {
            Sheets::Xlsx(xlsx) => xlsx
                .worksheet_merge_cells(name)
                .unwrap_or(Ok(Vec::new()))
                .unwrap_or_default(),
            Sheets::Xls(xls) => xls.worksheet_merge_cells(name).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

impl WorkbookSource for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn load_sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| Error::Sheet { sheet: name.to_string(), reason: e.to_string() })?;
        let merges = self.merge_cells(name);
        Ok(sheet_from_range(name, &range, &merges))
    }
}

/// Copy a calamine range into a 1-based `Sheet`. Calamine positions are
/// 0-based and absolute; the range itself may start anywhere.
pub fn sheet_from_range(name: &str, range: &Range<Data>, merges: &[Dimensions]) -> Sheet {
    let mut sheet = Sheet::new(name);
    if let Some((r0, c0)) = range.start() {
        for (r, c, data) in range.used_cells() {
            sheet.set(r0 + r as u32 + 1, c0 + c as u32 + 1, cell_value(data));
        }
    }
    if let Some((r1, c1)) = range.end() {
        sheet.extend_to(r1 + 1, c1 + 1);
    }
    for dim in merges {
        sheet.merge(MergedRegion::new(
            dim.start.0 + 1,
            dim.start.1 + 1,
            dim.end.0 + 1,
            dim.end.1 + 1,
        ));
    }
    sheet
}

pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if !dt.is_duration() => serial_to_datetime(dt.as_f64())
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => parse_iso(s).map(CellValue::Date).unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(|d| d.and_time(chrono::NaiveTime::MIN)))
}

/// Sheets built in code. Used by tests, benches and callers that already
/// hold the grid.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWorkbook {
    sheets: Vec<Sheet>,
}

impl InMemoryWorkbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}

impl WorkbookSource for InMemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name().to_string()).collect()
    }

    fn load_sheet(&mut self, name: &str) -> Result<Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .cloned()
            .ok_or_else(|| Error::Sheet { sheet: name.to_string(), reason: s!("no such sheet") })
    }
}
