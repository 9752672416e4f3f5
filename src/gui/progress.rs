// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::diag::{Diagnostics, Level};

/// Mirrors pipeline notes into the status line and keeps the warnings.
pub struct GuiDiagnostics {
    status: Arc<Mutex<String>>,
    pub warnings: Vec<String>,
    done: usize,
    total: usize,
}

impl GuiDiagnostics {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, warnings: Vec::new(), done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Diagnostics for GuiDiagnostics {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn note(&mut self, level: Level, msg: &str) {
        if level >= Level::Warn {
            self.warnings.push(format!("[{level}] {msg}"));
        }
        if level >= Level::Info {
            self.set_status(s!(msg));
        }
    }

    fn sheet_done(&mut self, sheet: &str) {
        self.done += 1;
        self.set_status(format!("Read sheet {sheet} ({}/{})", self.done, self.total));
    }

    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Done"));
        } else {
            self.set_status(format!("Done ({}/{} sheets)", self.done, self.total));
        }
    }
}
