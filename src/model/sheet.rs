// src/model/sheet.rs
//
// In-memory worksheet: typed cells addressed 1-based (row, col), plus the
// merged regions declared on the sheet. Built once by a WorkbookSource and
// read-only afterwards.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::dates::format_datetime;
use crate::core::sanitize::format_number;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
    Error(String),
}

static EMPTY: CellValue = CellValue::Empty;

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Trimmed display text, the way the sheet shows it.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => if *b { s!("TRUE") } else { s!("FALSE") },
            CellValue::Date(dt) => format_datetime(dt),
            CellValue::Error(e) => e.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self { CellValue::Text(s.to_string()) }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self { CellValue::Text(s) }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self { CellValue::Number(n) }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self { CellValue::Bool(b) }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self { CellValue::Date(d.and_time(chrono::NaiveTime::MIN)) }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self { CellValue::Date(dt) }
}

/// Rectangular merged span, inclusive on both ends. Only the anchor
/// `(min_row, min_col)` holds a value in the source sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergedRegion {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl MergedRegion {
    pub fn new(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> Self {
        Self {
            min_row: min_row.min(max_row),
            min_col: min_col.min(max_col),
            max_row: min_row.max(max_row),
            max_col: min_col.max(max_col),
        }
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.min_row..=self.max_row).contains(&row) && (self.min_col..=self.max_col).contains(&col)
    }

    pub fn anchor(&self) -> (u32, u32) {
        (self.min_row, self.min_col)
    }

    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.min_row..=self.max_row)
            .flat_map(move |r| (self.min_col..=self.max_col).map(move |c| (r, c)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Sheet {
    name: String,
    cells: HashMap<(u32, u32), CellValue>,
    max_row: u32,
    max_col: u32,
    merged: Vec<MergedRegion>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn name(&self) -> &str { &self.name }

    /// Last used row (1-based). Zero for an empty sheet.
    pub fn max_row(&self) -> u32 { self.max_row }

    pub fn max_col(&self) -> u32 { self.max_col }

    pub fn merged_regions(&self) -> &[MergedRegion] { &self.merged }

    /// Store a value. Row/col 0 are ignored; empty values only grow the dimensions.
    pub fn set(&mut self, row: u32, col: u32, value: impl Into<CellValue>) {
        if row == 0 || col == 0 { return; }
        self.extend_to(row, col);
        let value = value.into();
        if matches!(value, CellValue::Empty) {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    /// Builder form of `set`.
    pub fn with(mut self, row: u32, col: u32, value: impl Into<CellValue>) -> Self {
        self.set(row, col, value);
        self
    }

    pub fn merge(&mut self, region: MergedRegion) {
        self.extend_to(region.max_row, region.max_col);
        self.merged.push(region);
    }

    pub fn with_merge(mut self, region: MergedRegion) -> Self {
        self.merge(region);
        self
    }

    /// Grow the used area, e.g. to the dimension the file declares.
    pub fn extend_to(&mut self, row: u32, col: u32) {
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    /// Direct cell value; merged regions are NOT consulted.
    pub fn get(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    /// Direct display text, trimmed.
    pub fn text(&self, row: u32, col: u32) -> String {
        self.get(row, col).display()
    }
}
