// src/scrape/aggregate.rs
use std::collections::HashSet;

use crate::config::consts::*;
use crate::config::TemplateLayout;
use crate::core::rating::is_rating_token;
use crate::core::sanitize::col_letter;
use crate::core::Rating;
use crate::diag::Diagnostics;
use crate::model::{RawRecord, RiskCategory, RiskFactor};

/// Nest, dedup, back-fill and escalate. This is the processed risk table.
pub fn process_risk_table(
    records: &[RawRecord],
    layout: &TemplateLayout,
    diag: &mut dyn Diagnostics,
) -> Vec<RiskCategory> {
    let mut table = aggregate(records, layout, diag);
    escalate(&mut table);
    table
}

/// Two passes over the flat records.
///
/// Pass 1 creates one category per distinct header name, first position wins.
/// Pass 2 attaches factors to their category, dropping names already seen in
/// that category. Categories left empty get a placeholder factor.
pub fn aggregate(
    records: &[RawRecord],
    layout: &TemplateLayout,
    diag: &mut dyn Diagnostics,
) -> Vec<RiskCategory> {
    if records.is_empty() {
        diag.warn("no records in range, emitting placeholder table");
        return vec![no_data_category()];
    }

    let mut categories: Vec<RiskCategory> = Vec::new();
    for rec in records.iter().filter(|r| r.is_category_header()) {
        if categories.iter().any(|c| c.name == rec.name) {
            diag.debug(&format!("duplicate category `{}` skipped", rec.name));
            continue;
        }
        categories.push(RiskCategory::new(rec.name.clone(), rec.rating));
    }
    if categories.is_empty() {
        diag.debug("no category header, using default category");
        categories.push(RiskCategory::new(UNCATEGORIZED, Rating::Faible));
    }

    let mut seen: Vec<HashSet<String>> = vec![HashSet::new(); categories.len()];
    for rec in records.iter().filter(|r| !r.is_category_header()) {
        if rec.name.is_empty() {
            continue;
        }
        let idx = match categories.iter().position(|c| c.name == rec.category) {
            Some(i) => i,
            None => {
                diag.warn(&format!(
                    "category `{}` not found for factor `{}`, using `{}`",
                    rec.category, rec.name, categories[0].name
                ));
                0
            }
        };
        if !seen[idx].insert(rec.name.clone()) {
            diag.debug(&format!("duplicate factor `{}` in `{}` skipped", rec.name, categories[idx].name));
            continue;
        }
        categories[idx].factors.push(RiskFactor {
            name: rec.name.clone(),
            profile: pick_profile(rec, layout),
            rating: rec.rating,
        });
    }

    for cat in categories.iter_mut().filter(|c| c.factors.is_empty()) {
        diag.debug(&format!("category `{}` has no factor, adding placeholder", cat.name));
        cat.factors.push(RiskFactor {
            name: s!(EMPTY_CATEGORY_FACTOR),
            profile: s!(EMPTY_CATEGORY_PROFILE),
            rating: cat.rating,
        });
    }
    categories
}

/// First usable profile column: non-empty, not a rating token, not the factor
/// name bleeding through a merge.
pub fn pick_profile(rec: &RawRecord, layout: &TemplateLayout) -> String {
    layout
        .profile_cols
        .iter()
        .filter_map(|&col| rec.cell(&col_letter(col)))
        .map(str::trim)
        .find(|v| !v.is_empty() && !is_rating_token(v) && *v != rec.name)
        .map(str::to_string)
        .unwrap_or_else(|| s!(UNSPECIFIED_PROFILE))
}

/// Raise each category to the highest rating among its factors. Idempotent.
pub fn escalate(categories: &mut [RiskCategory]) {
    for cat in categories {
        if let Some(top) = cat.max_factor_rating() {
            cat.rating = cat.rating.max(top);
        }
    }
}

/// Table used when nothing at all came out of the range.
pub fn no_data_category() -> RiskCategory {
    RiskCategory {
        name: s!(NO_DATA_CATEGORY),
        rating: Rating::Faible,
        factors: vec![RiskFactor {
            name: s!(NO_DATA_FACTOR),
            profile: s!(NO_DATA_PROFILE),
            rating: Rating::Faible,
        }],
    }
}
