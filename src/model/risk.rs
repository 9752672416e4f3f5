// src/model/risk.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::consts::KNOWN_CATEGORIES;
use crate::core::Rating;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    CategoryHeader,
    Factor,
}

/// One row lifted out of the data range, before nesting.
/// Also emitted verbatim as `extractedRiskData` for diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub kind: RecordKind,
    /// Sheet row the record came from.
    pub row: u32,
    /// Owning category (the header's own name for headers).
    pub category: String,
    /// Factor name, or category label for headers.
    pub name: String,
    /// Non-empty cells of the row by column letter, merged values resolved.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cells: BTreeMap<String, String>,
    /// Effective rating after fallback.
    pub rating: Rating,
    /// Rating cell text as found, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_raw: Option<String>,
}

impl RawRecord {
    pub fn is_category_header(&self) -> bool {
        self.kind == RecordKind::CategoryHeader
    }

    pub fn cell(&self, letter: &str) -> Option<&str> {
        self.cells.get(letter).map(|s| s.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub profile: String,
    pub rating: Rating,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCategory {
    pub name: String,
    pub rating: Rating,
    pub factors: Vec<RiskFactor>,
}

impl RiskCategory {
    pub fn new(name: impl Into<String>, rating: Rating) -> Self {
        Self { name: name.into(), rating, factors: Vec::new() }
    }

    pub fn max_factor_rating(&self) -> Option<Rating> {
        self.factors.iter().map(|f| f.rating).max()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    pub categories_found: usize,
    pub factors_found: usize,
    pub has_valid_risk_level: bool,
    pub has_update_date: bool,
    pub has_assessment_date: bool,
}

/// Header metadata pulled from around the risk table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub name: String,
    pub risk_level: Rating,
    /// False when no cell backed the risk level and it is the default.
    pub risk_level_found: bool,
    pub update_date: Option<String>,
    pub assessment_date: Option<String>,
    pub additional_info: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub name: String,
    pub risk_level: Rating,
    pub update_date: Option<String>,
    pub assessment_date: Option<String>,
    pub processed_risk_table: Vec<RiskCategory>,
    pub extracted_risk_data: Vec<RawRecord>,
    pub known_categories: Vec<String>,
    pub sheet_name: String,
    pub additional_info: BTreeMap<String, String>,
    pub data_quality: DataQuality,
}

impl ClientRecord {
    pub fn new(
        sheet_name: &str,
        info: ClientInfo,
        processed_risk_table: Vec<RiskCategory>,
        extracted_risk_data: Vec<RawRecord>,
    ) -> Self {
        let data_quality = DataQuality {
            categories_found: processed_risk_table.len(),
            factors_found: processed_risk_table.iter().map(|c| c.factors.len()).sum(),
            has_valid_risk_level: info.risk_level_found,
            has_update_date: info.update_date.is_some(),
            has_assessment_date: info.assessment_date.is_some(),
        };
        Self {
            name: info.name,
            risk_level: info.risk_level,
            update_date: info.update_date,
            assessment_date: info.assessment_date,
            processed_risk_table,
            extracted_risk_data,
            known_categories: KNOWN_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            sheet_name: sheet_name.to_string(),
            additional_info: info.additional_info,
            data_quality,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub clients: Vec<ClientRecord>,
}

impl Report {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }
}
