// src/gui/components/mod.rs
pub mod client_panel;
pub mod open_bar;
pub mod risk_table;
