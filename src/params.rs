// src/params.rs
use std::path::PathBuf;

use crate::config::ExtractOptions;

pub const DEFAULT_OUT_FILENAME: &str = "clients.json";

/// One CLI run, after argument parsing and config loading.
#[derive(Clone, Debug)]
pub struct Params {
    pub path: PathBuf,               // workbook, absolute once resolved
    pub opts: ExtractOptions,        // layout, skip list, min rows
    pub out: Option<PathBuf>,        // None → stdout
    pub pretty: bool,                // indented JSON
    pub list_sheets: bool,           // print sheet names then exit
    pub verbosity: u8,               // -v count
}
