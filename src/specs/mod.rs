// src/specs/mod.rs
//! # Sheet reading "specs"
//!
//! This module knows **where the ground truth lives in a risk-assessment sheet**
//! and how to lift it out robustly. Each spec covers one concern of the template.
//!
//! ## What lives here
//! - **Cell resolution** (`cells`): effective values with merged-region substitution.
//! - **Category detection** (`categories`): an ordered chain of detection rules
//!   (strict label match → keyword → structural → default).
//! - **Range extraction** (`range`): flat `RawRecord`s tagged with their category.
//! - **Header metadata** (`client_info`): client name, overall risk level, dates.
//!
//! ## What does **not** live here
//! - **Nesting, dedup and escalation** of records: see `scrape::aggregate`.
//! - **Workbook iteration**, skip lists, per-sheet fallbacks: see `scrape::workbook`.
//! - **File formats**: specs only see the in-memory `model::Sheet`.
//!
//! ## Typical call chain
//! ```text
//! scrape::workbook → specs::categories::detect → specs::range::extract_range
//!                  ↘ specs::client_info::extract_client_info
//! ```
//!
//! ## Conventions & invariants
//! - Rows and columns are **1-based**; windows are inclusive.
//! - Column roles and row windows come from `config::TemplateLayout`, never literals.
//! - Specs never fail. Unexpected input degrades to a documented default and a
//!   diagnostic note.
//!
//! In short: **`specs` knows how to read the sheets.**
pub mod cells;
pub mod categories;
pub mod client_info;
pub mod range;
