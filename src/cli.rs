// src/cli.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{ExtractOptions, TemplateKind};
use crate::diag::TracingDiagnostics;
use crate::params::Params;

/// Extract AML/KYC risk tables from a workbook and print them as JSON.
#[derive(Debug, Parser)]
#[command(name = "risk_scrape", version, about)]
pub struct Args {
    /// Workbook to read (.xlsx, .xlsm, .xlsb, .xls, .ods)
    pub path: PathBuf,

    /// Built-in sheet layout
    #[arg(long, value_enum)]
    pub template: Option<TemplateKind>,

    /// TOML file overriding layout, skip list or minimum rows
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write JSON here instead of stdout (a directory gets clients.json)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// More diagnostics on stderr (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print sheet names and whether they would be processed, then exit
    #[arg(long)]
    pub list_sheets: bool,
}

impl Args {
    pub fn into_params(self) -> Result<Params> {
        let base = ExtractOptions::for_template(self.template.unwrap_or_default());
        let opts = match &self.config {
            Some(cfg) => ExtractOptions::load_onto(cfg, base)
                .wrap_err_with(|| format!("loading config {}", cfg.display()))?,
            None => base,
        };
        let path = std::path::absolute(&self.path)
            .wrap_err_with(|| format!("resolving {}", self.path.display()))?;

        Ok(Params {
            path,
            opts,
            out: self.out,
            pretty: self.pretty,
            list_sheets: self.list_sheets,
            verbosity: self.verbose,
        })
    }
}

pub fn run() -> Result<ExitCode> {
    let params = Args::parse().into_params()?;
    crate::log::init(params.verbosity);

    if params.list_sheets {
        let sheets = crate::runner::list_sheets(&params)
            .wrap_err_with(|| format!("listing sheets of {}", params.path.display()))?;
        for (name, reason) in sheets {
            match reason {
                Some(why) => println!("{name}\t(skipped: {why})"),
                None => println!("{name}"),
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut diag = TracingDiagnostics::default();
    let summary = crate::runner::run(&params, &mut diag).wrap_err("writing report")?;
    if summary.failed() {
        return Ok(ExitCode::FAILURE);
    }
    logf!("{} client(s)", summary.clients);
    Ok(ExitCode::SUCCESS)
}
