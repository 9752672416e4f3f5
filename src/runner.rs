// src/runner.rs
use std::path::PathBuf;

use crate::{
    diag::Diagnostics,
    file::write_output,
    model::Report,
    params::Params,
    scrape::try_process_excel_file,
    source::{CalamineWorkbook, WorkbookSource},
};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub clients: usize,
    pub written: Option<PathBuf>,
    /// Set when the workbook could not be opened; an empty report was emitted.
    pub file_error: Option<String>,
}

impl RunSummary {
    pub fn failed(&self) -> bool {
        self.file_error.is_some()
    }
}

/// Process `params.path` and write the JSON report.
/// A workbook that cannot be opened still produces `{"clients":[]}`.
pub fn run(params: &Params, diag: &mut dyn Diagnostics) -> crate::Result<RunSummary> {
    let (report, file_error) = match try_process_excel_file(&params.path, &params.opts, diag) {
        Ok(report) => (report, None),
        Err(e) => {
            diag.error(&e.to_string());
            (Report::empty(), Some(e.to_string()))
        }
    };

    let json = report.to_json(params.pretty)?;
    let written = write_output(params.out.as_deref(), &json)?;
    if let Some(path) = &written {
        logf!("wrote {}", path.display());
    }

    Ok(RunSummary { clients: report.clients.len(), written, file_error })
}

/// Sheet names with the reason a sheet would be skipped, if any.
pub fn list_sheets(params: &Params) -> crate::Result<Vec<(String, Option<&'static str>)>> {
    let mut workbook = CalamineWorkbook::open(&params.path)?;
    let mut out = Vec::new();
    for name in workbook.sheet_names() {
        let reason = if params.opts.is_skipped(&name) {
            Some("skip list")
        } else {
            match workbook.load_sheet(&name) {
                Ok(sheet) if sheet.max_row() < params.opts.min_rows => Some("too few rows"),
                Ok(_) => None,
                Err(_) => Some("unreadable"),
            }
        };
        out.push((name, reason));
    }
    Ok(out)
}
