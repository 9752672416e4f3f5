// src/specs/range.rs
use std::collections::BTreeMap;

use super::categories::Anchor;
use super::cells::CellResolver;
use crate::config::TemplateLayout;
use crate::core::{sanitize::col_letter, Rating};
use crate::diag::Diagnostics;
use crate::model::{RawRecord, RecordKind};

/// Walk the category blocks and lift each row into a flat `RawRecord`.
///
/// Block `i` spans from its anchor row to the row before anchor `i + 1`
/// (the last block runs to `end_row`). Values are read through the resolver,
/// so merged profile or rating cells are seen on every row they cover.
pub fn extract_range(
    resolver: &CellResolver<'_>,
    layout: &TemplateLayout,
    anchors: &[Anchor],
    diag: &mut dyn Diagnostics,
) -> Vec<RawRecord> {
    let sheet_name = resolver.sheet().name();
    let mut out = Vec::new();

    for (i, anchor) in anchors.iter().enumerate() {
        let block_end = anchors
            .get(i + 1)
            .map(|next| next.row.saturating_sub(1))
            .unwrap_or(layout.end_row)
            .min(layout.end_row);

        let header_raw = rating_text(resolver, layout, anchor.row);
        let category_rating = Rating::parse_or(header_raw.as_deref().unwrap_or_default(), Rating::Faible);
        out.push(RawRecord {
            kind: RecordKind::CategoryHeader,
            row: anchor.row,
            category: anchor.name.clone(),
            name: anchor.name.clone(),
            cells: if anchor.synthetic { BTreeMap::new() } else { row_cells(resolver, layout, anchor.row) },
            rating: category_rating,
            rating_raw: header_raw,
        });

        // The anchor row holds a factor too when names live in their own column,
        // or when no label occupies it.
        let first = if anchor.synthetic || layout.name_col != layout.category_col {
            anchor.row
        } else {
            anchor.row + 1
        };

        let mut found = 0usize;
        for row in first..=block_end {
            let name = resolver.resolve_text(row, layout.name_col);
            if name.is_empty() || name == anchor.name {
                continue;
            }
            if name.chars().count() < layout.min_factor_len {
                diag.debug(&format!("{sheet_name}: row {row} factor `{name}` too short, skipped"));
                continue;
            }
            let raw = rating_text(resolver, layout, row);
            let rating = Rating::parse_or(raw.as_deref().unwrap_or_default(), category_rating);
            out.push(RawRecord {
                kind: RecordKind::Factor,
                row,
                category: anchor.name.clone(),
                name,
                cells: row_cells(resolver, layout, row),
                rating,
                rating_raw: raw,
            });
            found += 1;
        }
        diag.debug(&format!(
            "{sheet_name}: `{}` rows {}-{block_end}, {found} factor row(s)",
            anchor.name, anchor.row
        ));
    }

    diag.info(&format!("{sheet_name}: extracted {} record(s) from {}", out.len(), layout.range_a1()));
    out
}

fn rating_text(resolver: &CellResolver<'_>, layout: &TemplateLayout, row: u32) -> Option<String> {
    let text = resolver.resolve_text(row, layout.rating_col);
    (!text.is_empty()).then_some(text)
}

/// Non-empty resolved cells of the data columns, keyed by column letter.
fn row_cells(resolver: &CellResolver<'_>, layout: &TemplateLayout, row: u32) -> BTreeMap<String, String> {
    (layout.start_col..=layout.end_col)
        .filter_map(|col| {
            let text = resolver.resolve_text(row, col);
            (!text.is_empty()).then(|| (col_letter(col), text))
        })
        .collect()
}
