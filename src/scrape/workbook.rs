// src/scrape/workbook.rs
use std::path::Path;

use super::aggregate::{no_data_category, process_risk_table};
use crate::config::ExtractOptions;
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::model::{ClientInfo, ClientRecord, Report, Sheet};
use crate::source::{CalamineWorkbook, WorkbookSource};
use crate::specs::{categories, cells::CellResolver, client_info, range};

/// Open a workbook and process every client sheet.
/// Fails only when the file itself cannot be opened.
pub fn try_process_excel_file(
    path: &Path,
    opts: &ExtractOptions,
    diag: &mut dyn Diagnostics,
) -> Result<Report> {
    let mut workbook = CalamineWorkbook::open(path)?;
    Ok(process_workbook(&mut workbook, opts, diag))
}

/// Like `try_process_excel_file`, but a file-level failure is reported to
/// `diag` and yields an empty report.
pub fn process_excel_file(path: &Path, opts: &ExtractOptions, diag: &mut dyn Diagnostics) -> Report {
    match try_process_excel_file(path, opts, diag) {
        Ok(report) => report,
        Err(e) => {
            diag.error(&e.to_string());
            diag.finish();
            Report::empty()
        }
    }
}

/// One client record per sheet that is neither skip-listed nor too short.
/// A sheet that fails is represented by a placeholder record; the loop goes on.
pub fn process_workbook(
    source: &mut dyn WorkbookSource,
    opts: &ExtractOptions,
    diag: &mut dyn Diagnostics,
) -> Report {
    let names = source.sheet_names();
    diag.begin(names.len());

    let mut clients = Vec::new();
    for name in &names {
        if opts.is_skipped(name) {
            diag.info(&format!("skipping non-client sheet `{name}`"));
            diag.sheet_done(name);
            continue;
        }

        let record = match source.load_sheet(name) {
            Ok(sheet) if sheet.max_row() < opts.min_rows => {
                diag.info(&format!("skipping `{name}`: {} row(s), need {}", sheet.max_row(), opts.min_rows));
                None
            }
            Ok(sheet) => Some(process_sheet(&sheet, opts, diag).unwrap_or_else(|e| {
                diag.error(&format!("`{name}`: {e}"));
                placeholder_client(name)
            })),
            Err(e) => {
                diag.error(&e.to_string());
                Some(placeholder_client(name))
            }
        };

        if let Some(record) = record {
            diag.info(&format!(
                "processed `{}` ({} categories, {} factors)",
                record.name, record.data_quality.categories_found, record.data_quality.factors_found
            ));
            clients.push(record);
        }
        diag.sheet_done(name);
    }

    diag.finish();
    Report { clients }
}

/// Risk table and header metadata of one client sheet.
pub fn process_sheet(sheet: &Sheet, opts: &ExtractOptions, diag: &mut dyn Diagnostics) -> Result<ClientRecord> {
    let layout = &opts.layout;
    layout.validate()?;

    let resolver = CellResolver::new(sheet);
    let anchors = categories::detect(sheet, layout, diag);
    let raw = range::extract_range(&resolver, layout, &anchors, diag);
    let table = process_risk_table(&raw, layout, diag);
    let info = client_info::extract_client_info(sheet, layout, diag);

    Ok(ClientRecord::new(sheet.name(), info, table, raw))
}

/// Stand-in for a sheet that could not be processed.
pub fn placeholder_client(sheet_name: &str) -> ClientRecord {
    let info = ClientInfo { name: sheet_name.to_string(), ..ClientInfo::default() };
    ClientRecord::new(sheet_name, info, vec![no_data_category()], Vec::new())
}
