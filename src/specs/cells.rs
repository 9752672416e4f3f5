// src/specs/cells.rs
use std::collections::HashMap;

use crate::model::{CellValue, Sheet};

/// Effective cell values for one sheet: a coordinate inside a merged region
/// reads as the region's anchor value.
pub struct CellResolver<'a> {
    sheet: &'a Sheet,
    merged: HashMap<(u32, u32), CellValue>,
}

impl<'a> CellResolver<'a> {
    pub fn new(sheet: &'a Sheet) -> Self {
        let mut merged = HashMap::new();
        for region in sheet.merged_regions() {
            let (r, c) = region.anchor();
            let anchor = sheet.get(r, c).clone();
            for at in region.cells() {
                merged.insert(at, anchor.clone());
            }
        }
        Self { sheet, merged }
    }

    pub fn sheet(&self) -> &'a Sheet {
        self.sheet
    }

    pub fn resolve(&self, row: u32, col: u32) -> &CellValue {
        match self.merged.get(&(row, col)) {
            Some(v) => v,
            None => self.sheet.get(row, col),
        }
    }

    /// Trimmed display text of the effective value.
    pub fn resolve_text(&self, row: u32, col: u32) -> String {
        self.resolve(row, col).display()
    }
}
