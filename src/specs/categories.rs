// src/specs/categories.rs
//! Category detection as a prioritized rule chain.
//!
//! Each strategy scans the category column over the layout's row window and
//! returns anchors in row order. `detect` runs them in order and keeps the
//! first non-empty answer, so the fallback path stays auditable and every rule
//! can be tested on its own.
//!
//! Detection reads **direct** cell values: a category label merged down the
//! column only has a value in its anchor cell, which yields one anchor per
//! category instead of one per covered row.

use crate::config::consts::{CATEGORY_KEYWORDS, KNOWN_CATEGORIES, UNCATEGORIZED};
use crate::config::TemplateLayout;
use crate::core::sanitize::contains_ci;
use crate::diag::Diagnostics;
use crate::model::Sheet;

/// Start of a category block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub row: u32,
    pub name: String,
    /// True for the default anchor: no label occupies its row.
    pub synthetic: bool,
}

impl Anchor {
    fn at(row: u32, name: String) -> Self {
        Self { row, name, synthetic: false }
    }
}

pub type Strategy = fn(&Sheet, &TemplateLayout) -> Vec<Anchor>;

pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("strict", strict_matches),
    ("keyword", keyword_matches),
    ("structural", structural_matches),
    ("default", default_anchor),
];

/// Non-empty category-column labels in the row window.
fn labels<'s>(sheet: &'s Sheet, layout: &TemplateLayout) -> impl Iterator<Item = (u32, String)> + 's {
    let col = layout.category_col;
    (layout.start_row..=layout.end_row).filter_map(move |row| {
        let text = sheet.text(row, col);
        (!text.is_empty()).then_some((row, text))
    })
}

/// Equal to, prefixed by, or containing (either way, ignoring case) a known label.
pub fn is_known_category(text: &str) -> bool {
    KNOWN_CATEGORIES.iter().any(|cat| {
        text == *cat || text.starts_with(cat) || contains_ci(text, cat) || contains_ci(cat, text)
    })
}

pub fn strict_matches(sheet: &Sheet, layout: &TemplateLayout) -> Vec<Anchor> {
    labels(sheet, layout)
        .filter(|(_, text)| is_known_category(text))
        .map(|(row, text)| Anchor::at(row, text))
        .collect()
}

pub fn keyword_matches(sheet: &Sheet, layout: &TemplateLayout) -> Vec<Anchor> {
    labels(sheet, layout)
        .filter(|(_, text)| {
            let lower = text.to_lowercase();
            CATEGORY_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(|(row, text)| Anchor::at(row, text))
        .collect()
}

/// A label whose right-hand neighbour is empty looks like a section header.
pub fn structural_matches(sheet: &Sheet, layout: &TemplateLayout) -> Vec<Anchor> {
    let detail = layout.detail_col();
    labels(sheet, layout)
        .filter(|(row, _)| sheet.get(*row, detail).is_empty())
        .map(|(row, text)| Anchor::at(row, text))
        .collect()
}

pub fn default_anchor(_sheet: &Sheet, layout: &TemplateLayout) -> Vec<Anchor> {
    vec![Anchor { row: layout.start_row, name: s!(UNCATEGORIZED), synthetic: true }]
}

pub fn detect(sheet: &Sheet, layout: &TemplateLayout, diag: &mut dyn Diagnostics) -> Vec<Anchor> {
    for (i, (label, strategy)) in STRATEGIES.iter().enumerate() {
        let anchors = strategy(sheet, layout);
        if anchors.is_empty() {
            continue;
        }
        if i > 0 {
            diag.warn(&format!(
                "{}: no category under earlier rules, using {label} detection ({} found)",
                sheet.name(),
                anchors.len()
            ));
        }
        for a in &anchors {
            diag.debug(&format!("{}: category `{}` at row {}", sheet.name(), a.name, a.row));
        }
        return anchors;
    }
    default_anchor(sheet, layout)
}
