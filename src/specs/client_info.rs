// src/specs/client_info.rs
//! Header metadata around the risk table: client name, overall risk level,
//! update/assessment dates and a few descriptive fields.
//!
//! Every field has its own scan and its own default. A scan that finds
//! nothing leaves its field alone; it never affects the others.
//! All scans read direct cell values, windows are 1-based and inclusive.
//! The name and descriptive-field scans never look inside the risk table:
//! its category labels ("Caractéristiques du client") would otherwise win.

use std::collections::BTreeMap;

use crate::config::consts::*;
use crate::config::TemplateLayout;
use crate::core::dates::{format_date, number_as_date_text};
use crate::core::Rating;
use crate::diag::Diagnostics;
use crate::model::{CellValue, ClientInfo, Sheet};

/// Text cells of a window, trimmed, skipping blanks.
fn text_cells(sheet: &Sheet, rows: impl Iterator<Item = u32>, max_col: u32) -> Vec<(u32, u32, &str)> {
    let mut out = Vec::new();
    for row in rows {
        for col in 1..=max_col {
            if let Some(t) = sheet.get(row, col).as_text() {
                let t = t.trim();
                if !t.is_empty() {
                    out.push((row, col, t));
                }
            }
        }
    }
    out
}

/// Text cells of the name window that lie outside the data range.
fn header_cells<'s>(sheet: &'s Sheet, layout: &TemplateLayout) -> Vec<(u32, u32, &'s str)> {
    let rows = 1..=NAME_SCAN_ROWS.min(sheet.max_row());
    let mut cells = text_cells(sheet, rows, NAME_SCAN_COLS);
    cells.retain(|&(row, col, _)| !layout.contains(row, col));
    cells
}

/// Longest header cell that mentions an institutional keyword.
pub fn extract_name(sheet: &Sheet, layout: &TemplateLayout) -> Option<String> {
    let mut best: Option<&str> = None;
    for (_, _, text) in header_cells(sheet, layout) {
        let upper = text.to_uppercase();
        if !NAME_KEYWORDS.iter().any(|k| upper.contains(k)) {
            continue;
        }
        if best.is_none_or(|b| text.chars().count() > b.chars().count()) {
            best = Some(text);
        }
    }
    best.map(str::to_string)
}

/// `sector`, `country` and `clientType` cells from the name window. Later cells win.
pub fn extract_additional_info(sheet: &Sheet, layout: &TemplateLayout) -> BTreeMap<String, String> {
    let mut info = BTreeMap::new();
    for (_, _, text) in header_cells(sheet, layout) {
        let upper = text.to_uppercase();
        let key = if upper.contains("SECTEUR") || upper.contains("SECTOR") {
            "sector"
        } else if upper.contains("PAYS") || upper.contains("COUNTRY") {
            "country"
        } else if upper.contains("TYPE") && upper.contains("CLIENT") {
            "clientType"
        } else {
            continue;
        };
        info.insert(s!(key), text.to_string());
    }
    info
}

/// Rating next to a "Niveau risque" / "Risk level" label, scanning upward
/// from the last row. The first label with a rating beside it wins.
pub fn risk_level_by_label(sheet: &Sheet) -> Option<Rating> {
    let max_row = sheet.max_row();
    let lo = max_row.saturating_sub(RISK_LABEL_WINDOW).max(1) + 1;
    for row in (lo..=max_row).rev() {
        for col in 1..=RISK_SCAN_COLS {
            let Some(label) = sheet.get(row, col).as_text() else { continue };
            let label = label.to_lowercase();
            if !RISK_LABELS.iter().any(|l| label.contains(l)) {
                continue;
            }
            let last = (col + LABEL_LOOKAHEAD).min(RISK_SCAN_COLS);
            if let Some(r) = (col + 1..=last).find_map(|c| Rating::parse(&sheet.text(row, c))) {
                return Some(r);
            }
        }
    }
    None
}

/// A standalone `Moyen`/`Élevé` near the bottom, accepted only when a
/// neighbouring cell talks about risk.
pub fn risk_level_by_context(sheet: &Sheet) -> Option<Rating> {
    let max_row = sheet.max_row();
    if max_row <= MIN_CLIENT_ROWS {
        return None;
    }
    let lo = max_row.saturating_sub(RISK_CONTEXT_WINDOW).max(1);
    for row in lo..=max_row {
        for col in 1..=RISK_SCAN_COLS {
            let rating = match Rating::parse(&sheet.text(row, col)) {
                Some(r) if r > Rating::Faible => r,
                _ => continue,
            };
            if has_risk_context(sheet, row, col) {
                return Some(rating);
            }
        }
    }
    None
}

fn has_risk_context(sheet: &Sheet, row: u32, col: u32) -> bool {
    let rows = row.saturating_sub(2).max(1)..=(row + 2).min(sheet.max_row());
    let cols = col.saturating_sub(3).max(1)..=(col + 3).min(RISK_SCAN_COLS);
    rows.flat_map(|r| cols.clone().map(move |c| (r, c))).any(|(r, c)| {
        sheet
            .get(r, c)
            .as_text()
            .map(|t| {
                let t = t.to_lowercase();
                RISK_CONTEXT_WORDS.iter().any(|w| t.contains(w))
            })
            .unwrap_or(false)
    })
}

pub fn extract_risk_level(sheet: &Sheet) -> Option<Rating> {
    risk_level_by_label(sheet).or_else(|| risk_level_by_context(sheet))
}

/// Text for a cell found next to a date label.
pub fn date_text(value: &CellValue) -> Option<String> {
    match value {
        CellValue::Date(dt) => Some(format_date(dt.date())),
        CellValue::Number(n) => Some(number_as_date_text(*n)),
        CellValue::Text(t) => {
            let t = t.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        CellValue::Bool(_) | CellValue::Empty | CellValue::Error(_) => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dates {
    pub update: Option<String>,
    pub assessment: Option<String>,
}

/// Labelled dates first; any gap is filled from the first date-typed cells
/// at the top of the sheet.
pub fn extract_dates(sheet: &Sheet) -> Dates {
    let mut dates = Dates::default();
    let mut used = Vec::new();

    let rows = 1..=DATE_SCAN_ROWS.min(sheet.max_row());
    for (row, col, text) in text_cells(sheet, rows, DATE_SCAN_COLS) {
        let label = text.to_lowercase();
        let slot = if UPDATE_DATE_LABELS.iter().any(|l| label.contains(l)) {
            &mut dates.update
        } else if ASSESSMENT_DATE_LABELS.iter().any(|l| label.contains(l)) {
            &mut dates.assessment
        } else {
            continue;
        };
        let last = (col + LABEL_LOOKAHEAD).min(DATE_SCAN_COLS);
        if let Some((c, value)) = (col + 1..=last).find_map(|c| date_text(sheet.get(row, c)).map(|v| (c, v))) {
            *slot = Some(value);
            used.push((row, c));
        }
    }

    if dates.update.is_none() || dates.assessment.is_none() {
        'scan: for row in 1..=DATE_FALLBACK_ROWS.min(sheet.max_row()) {
            for col in 1..=DATE_SCAN_COLS {
                let CellValue::Date(dt) = sheet.get(row, col) else { continue };
                if used.contains(&(row, col)) {
                    continue;
                }
                let text = format_date(dt.date());
                if dates.update.is_none() {
                    dates.update = Some(text);
                } else if dates.assessment.is_none() {
                    dates.assessment = Some(text);
                } else {
                    break 'scan;
                }
            }
        }
    }
    dates
}

pub fn extract_client_info(sheet: &Sheet, layout: &TemplateLayout, diag: &mut dyn Diagnostics) -> ClientInfo {
    let sheet_name = sheet.name();

    let name = extract_name(sheet, layout).unwrap_or_else(|| {
        diag.debug(&format!("{sheet_name}: no client name in header, using sheet name"));
        sheet_name.to_string()
    });

    let risk_level = extract_risk_level(sheet);
    if risk_level.is_none() {
        diag.debug(&format!("{sheet_name}: no overall risk level, defaulting to Faible"));
    }

    let Dates { update, assessment } = extract_dates(sheet);
    if update.is_none() {
        diag.debug(&format!("{sheet_name}: no update date"));
    }
    if assessment.is_none() {
        diag.debug(&format!("{sheet_name}: no assessment date"));
    }

    ClientInfo {
        name,
        risk_level: risk_level.unwrap_or_default(),
        risk_level_found: risk_level.is_some(),
        update_date: update,
        assessment_date: assessment,
        additional_info: extract_additional_info(sheet, layout),
    }
}
