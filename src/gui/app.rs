// src/gui/app.rs
use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{ExtractOptions, TemplateKind},
    model::{ClientRecord, Report},
    scrape::process_excel_file,
};

use super::progress::GuiDiagnostics;

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        "Risk table viewer",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}

pub struct App {
    // workbook path field
    pub path_text: String,
    pub template: TemplateKind,

    // last processed workbook
    pub report: Report,
    pub selected: usize,
    pub warnings: Vec<String>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            path_text: String::new(),
            template: TemplateKind::default(),
            report: Report::empty(),
            selected: 0,
            warnings: Vec::new(),
            status: Arc::new(Mutex::new(s!("Open a workbook"))),
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn selected_client(&self) -> Option<&ClientRecord> {
        self.report.clients.get(self.selected)
    }

    /// Process the workbook named in the path field.
    pub fn open(&mut self) {
        let path = PathBuf::from(self.path_text.trim());
        logf!("UI: open {} ({:?})", path.display(), self.template);

        let opts = ExtractOptions::for_template(self.template);
        let mut diag = GuiDiagnostics::new(self.status.clone());
        self.report = process_excel_file(&path, &opts, &mut diag);
        self.warnings = diag.warnings;
        self.selected = 0;

        if self.report.clients.is_empty() {
            let why = self.warnings.last().cloned().unwrap_or_else(|| s!("no client sheet found"));
            if let Ok(mut s) = self.status.lock() {
                *s = format!("No clients: {why}");
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.path_text = path.to_string_lossy().into_owned();
            self.open();
        }

        egui::TopBottomPanel::top("open_bar").show(ctx, |ui| {
            super::components::open_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::SidePanel::left("clients")
            .resizable(true)
            .show(ctx, |ui| {
                super::components::client_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::risk_table::draw(ui, self);
        });
    }
}
