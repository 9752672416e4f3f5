// src/config/consts.rs

// Template vocabulary
pub const KNOWN_CATEGORIES: [&str; 5] = [
    "Zone géographique",
    "Caractéristiques du client",
    "Réputation du client",
    "Nature produits/opérations",
    "Canal de distribution",
];

// Lowercase fragments for the lenient category pass
pub const CATEGORY_KEYWORDS: [&str; 9] = [
    "zone", "géo", "client", "caractéristique", "réputation",
    "produit", "opération", "canal", "distribution",
];

// Workbook scan
pub const SKIP_SHEETS: [&str; 5] = ["Instructions", "Guide", "Template", "Index", "Profil de risque"];
pub const MIN_CLIENT_ROWS: u32 = 10;

// Default data range (A8:E27)
pub const DEFAULT_START_ROW: u32 = 8;
pub const DEFAULT_END_ROW: u32 = 27;

// Placeholders
pub const UNCATEGORIZED: &str = "Données non catégorisées";
pub const UNSPECIFIED_PROFILE: &str = "Non spécifié";
pub const EMPTY_CATEGORY_FACTOR: &str = "Information non disponible";
pub const EMPTY_CATEGORY_PROFILE: &str = "Aucune donnée trouvée pour cette catégorie";
pub const NO_DATA_CATEGORY: &str = "Données non disponibles";
pub const NO_DATA_FACTOR: &str = "Information manquante";
pub const NO_DATA_PROFILE: &str = "Aucune donnée trouvée dans la plage spécifiée";

// Client info windows (1-based, inclusive)
pub const NAME_SCAN_ROWS: u32 = 14;
pub const NAME_SCAN_COLS: u32 = 9;
pub const NAME_KEYWORDS: [&str; 6] = ["BANK", "SECURITIES", "CLIENT", "CUSTOMER", "AMAL", "RED MED"];

pub const RISK_LABEL_WINDOW: u32 = 20;
pub const RISK_CONTEXT_WINDOW: u32 = 15;
pub const RISK_SCAN_COLS: u32 = 9;
pub const RISK_LABELS: [&str; 2] = ["niveau risque", "risk level"];
pub const RISK_CONTEXT_WORDS: [&str; 4] = ["risque", "risk", "niveau", "level"];

pub const DATE_SCAN_ROWS: u32 = 59;
pub const DATE_SCAN_COLS: u32 = 11;
pub const DATE_FALLBACK_ROWS: u32 = 9;
pub const UPDATE_DATE_LABELS: [&str; 4] = ["date de maj", "date maj", "update date", "dernière mise à jour"];
pub const ASSESSMENT_DATE_LABELS: [&str; 4] = ["date d'eer", "date eer", "assessment date", "évaluation date"];

// Cells inspected to the right of a label
pub const LABEL_LOOKAHEAD: u32 = 3;
