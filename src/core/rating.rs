// src/core/rating.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk rating with a strict order: Faible < Moyen < Élevé.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[default]
    Faible,
    Moyen,
    #[serde(rename = "Élevé", alias = "Elevé")]
    Eleve,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Faible => "Faible",
            Rating::Moyen  => "Moyen",
            Rating::Eleve  => "Élevé",
        }
    }

    /// Recognise one of the template's rating tokens.
    /// `Elevé` (missing accent) folds into `Élevé`; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Rating> {
        match raw.trim() {
            "Faible" => Some(Rating::Faible),
            "Moyen" => Some(Rating::Moyen),
            "Élevé" | "Elevé" => Some(Rating::Eleve),
            _ => None,
        }
    }

    /// `parse` with a contextual default for unrecognised tokens.
    pub fn parse_or(raw: &str, fallback: Rating) -> Rating {
        Rating::parse(raw).unwrap_or(fallback)
    }
}

/// True for strings the template uses as rating cells, or as spreadsheet
/// noise that must never be taken for a profile.
pub fn is_rating_token(s: &str) -> bool {
    let t = s.trim();
    Rating::parse(t).is_some() || t == "None" || t == "nan"
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
