// src/config/options.rs
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::core::sanitize::{col_index, col_letter, parse_range};
use crate::error::{Error, Result};

/// Which built-in template the workbook follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Factor names in column A, one category label per block (A8:E27).
    #[default]
    Standard,
    /// Category labels merged down column A, factor names in column B (A9:E26).
    Merged,
}

/// Column roles and row window of the risk table. Columns and rows are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateLayout {
    pub category_col: u32,
    pub name_col: u32,
    /// Tried in order when picking a factor's profile text.
    pub profile_cols: Vec<u32>,
    pub rating_col: u32,
    pub start_row: u32,
    pub end_row: u32,
    pub start_col: u32,
    pub end_col: u32,
    /// Factor names shorter than this (in chars) are ignored.
    pub min_factor_len: usize,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl TemplateLayout {
    pub fn standard() -> Self {
        Self {
            category_col: 1,
            name_col: 1,
            profile_cols: vec![4, 3, 2],
            rating_col: 5,
            start_row: DEFAULT_START_ROW,
            end_row: DEFAULT_END_ROW,
            start_col: 1,
            end_col: 5,
            min_factor_len: 1,
        }
    }

    pub fn merged() -> Self {
        Self {
            name_col: 2,
            profile_cols: vec![4, 3],
            start_row: 9,
            end_row: 26,
            min_factor_len: 3,
            ..Self::standard()
        }
    }

    pub fn for_kind(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Standard => Self::standard(),
            TemplateKind::Merged => Self::merged(),
        }
    }

    /// Column just right of the category column; empty there hints at a header row.
    pub fn detail_col(&self) -> u32 {
        self.category_col + 1
    }

    /// True when `(row, col)` lies inside the risk table's data range.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.start_row..=self.end_row).contains(&row) && (self.start_col..=self.end_col).contains(&col)
    }

    /// `A8:E27` style description of the data range.
    pub fn range_a1(&self) -> String {
        format!(
            "{}{}:{}{}",
            col_letter(self.start_col), self.start_row,
            col_letter(self.end_col), self.end_row
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_row == 0 || self.start_col == 0 {
            return Err(Error::Layout(s!("rows and columns are 1-based")));
        }
        if self.end_row < self.start_row {
            return Err(Error::Layout(format!("end row {} is before start row {}", self.end_row, self.start_row)));
        }
        if self.end_col < self.start_col {
            return Err(Error::Layout(format!(
                "end column {} is before start column {}",
                col_letter(self.end_col), col_letter(self.start_col)
            )));
        }
        let roles = [self.category_col, self.name_col, self.rating_col];
        if roles.iter().chain(self.profile_cols.iter()).any(|&c| c == 0) {
            return Err(Error::Layout(s!("column roles must name a column")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub layout: TemplateLayout,
    pub skip_sheets: Vec<String>,
    /// Sheets whose last used row is below this are not client sheets.
    pub min_rows: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            layout: TemplateLayout::default(),
            skip_sheets: SKIP_SHEETS.iter().map(|s| s.to_string()).collect(),
            min_rows: MIN_CLIENT_ROWS,
        }
    }
}

impl ExtractOptions {
    pub fn for_template(kind: TemplateKind) -> Self {
        Self { layout: TemplateLayout::for_kind(kind), ..Self::default() }
    }

    pub fn is_skipped(&self, sheet_name: &str) -> bool {
        self.skip_sheets.iter().any(|s| s == sheet_name)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()
    }

    /// Read a TOML override file. Keys left out keep the values of `base`.
    pub fn load_onto(path: &Path, base: Self) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&text)
            .map_err(|source| Error::Config { path: path.to_path_buf(), source })?;
        let opts = file.apply(base)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)
            .map_err(|source| Error::Config { path: "<inline>".into(), source })?;
        let opts = file.apply(Self::default())?;
        opts.validate()?;
        Ok(opts)
    }
}

/// On-disk form: column letters and an A1 range, everything optional.
///
/// ```toml
/// template = "merged"
/// range = "A9:E26"
/// profile_cols = ["D", "C"]
/// skip_sheets = ["Instructions", "Synthèse"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    template: Option<TemplateKind>,
    range: Option<String>,
    category_col: Option<String>,
    name_col: Option<String>,
    profile_cols: Option<Vec<String>>,
    rating_col: Option<String>,
    min_factor_len: Option<usize>,
    skip_sheets: Option<Vec<String>>,
    min_rows: Option<u32>,
}

fn column(key: &str, letters: &str) -> Result<u32> {
    col_index(letters).ok_or_else(|| Error::Layout(format!("{key}: `{letters}` is not a column")))
}

impl ConfigFile {
    fn apply(self, mut opts: ExtractOptions) -> Result<ExtractOptions> {
        if let Some(kind) = self.template {
            opts.layout = TemplateLayout::for_kind(kind);
        }
        let layout = &mut opts.layout;
        if let Some(range) = self.range {
            let ((r0, c0), (r1, c1)) = parse_range(&range)
                .ok_or_else(|| Error::Layout(format!("range: `{range}` is not an A1 range")))?;
            layout.start_row = r0;
            layout.start_col = c0;
            layout.end_row = r1;
            layout.end_col = c1;
        }
        if let Some(c) = self.category_col { layout.category_col = column("category_col", &c)?; }
        if let Some(c) = self.name_col { layout.name_col = column("name_col", &c)?; }
        if let Some(c) = self.rating_col { layout.rating_col = column("rating_col", &c)?; }
        if let Some(cols) = self.profile_cols {
            layout.profile_cols = cols
                .iter()
                .map(|c| column("profile_cols", c))
                .collect::<Result<Vec<_>>>()?;
        }
        if let Some(n) = self.min_factor_len { layout.min_factor_len = n; }
        if let Some(list) = self.skip_sheets { opts.skip_sheets = list; }
        if let Some(n) = self.min_rows { opts.min_rows = n; }
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_is_a8_e27() {
        let l = TemplateLayout::standard();
        assert_eq!(l.range_a1(), "A8:E27");
        assert_eq!(l.profile_cols, vec![4, 3, 2]);
        assert!(l.contains(8, 1) && l.contains(27, 5));
        assert!(!l.contains(7, 1) && !l.contains(10, 6));
        assert!(l.validate().is_ok());
    }

    #[test]
    fn merged_layout_reads_names_from_b() {
        let l = TemplateLayout::merged();
        assert_eq!(l.name_col, 2);
        assert_eq!(l.range_a1(), "A9:E26");
        assert_eq!(l.min_factor_len, 3);
    }

    #[test]
    fn toml_overrides_only_named_keys() {
        let opts = ExtractOptions::from_toml_str(
            r#"
            range = "A1:E27"
            profile_cols = ["D", "C"]
            min_rows = 5
            "#,
        )
        .unwrap();
        assert_eq!(opts.layout.start_row, 1);
        assert_eq!(opts.layout.end_row, 27);
        assert_eq!(opts.layout.profile_cols, vec![4, 3]);
        assert_eq!(opts.layout.rating_col, 5);
        assert_eq!(opts.min_rows, 5);
        assert!(opts.is_skipped("Guide"));
    }

    #[test]
    fn template_key_selects_preset_before_overrides() {
        let opts = ExtractOptions::from_toml_str("template = \"merged\"\nrating_col = \"F\"").unwrap();
        assert_eq!(opts.layout.name_col, 2);
        assert_eq!(opts.layout.rating_col, 6);
    }

    #[test]
    fn bad_config_is_rejected() {
        assert!(matches!(ExtractOptions::from_toml_str("range = \"E27:A8\""), Err(Error::Layout(_))));
        assert!(matches!(ExtractOptions::from_toml_str("name_col = \"1\""), Err(Error::Layout(_))));
        assert!(matches!(ExtractOptions::from_toml_str("colour = 3"), Err(Error::Config { .. })));
    }
}
