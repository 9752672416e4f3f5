// tests/pipeline.rs
use std::collections::HashSet;

use risk_scrape::diag::{Collector, NullDiagnostics};
use risk_scrape::model::{MergedRegion, Sheet};
use risk_scrape::{process_workbook, ExtractOptions, InMemoryWorkbook, Rating, Report};

/// Standard layout: category labels and factor names in A, profile in D, rating in E.
fn sheet_with_rows(name: &str, rows: &[(&str, &str, &str)]) -> Sheet {
    let mut s = Sheet::new(name);
    for (i, (a, d, e)) in rows.iter().enumerate() {
        let r = 8 + i as u32;
        s.set(r, 1, *a);
        s.set(r, 4, *d);
        s.set(r, 5, *e);
    }
    s.set(30, 1, "Niveau risque");
    s
}

fn run(sheets: Vec<Sheet>) -> Report {
    let mut wb = InMemoryWorkbook::new(sheets);
    process_workbook(&mut wb, &ExtractOptions::default(), &mut NullDiagnostics)
}

fn assert_invariants(report: &Report) {
    for client in &report.clients {
        let names: HashSet<_> = client.processed_risk_table.iter().map(|c| &c.name).collect();
        assert_eq!(names.len(), client.processed_risk_table.len(), "duplicate category in {}", client.name);
        for cat in &client.processed_risk_table {
            assert!(!cat.factors.is_empty(), "empty category {}", cat.name);
            let f: HashSet<_> = cat.factors.iter().map(|f| &f.name).collect();
            assert_eq!(f.len(), cat.factors.len(), "duplicate factor in {}", cat.name);
            assert!(cat.factors.iter().all(|f| f.rating <= cat.rating));
        }
    }
}

#[test]
fn scenario_two_categories_one_factor_each() {
    let report = run(vec![sheet_with_rows("Client", &[
        ("Zone géographique", "", "Faible"),
        ("Pays A", "", "Faible"),
        ("Caractéristiques du client", "", "Moyen"),
        ("Secteur X", "", "Moyen"),
    ])]);
    let table = &report.clients[0].processed_risk_table;
    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|c| c.factors.len() == 1));
    assert_eq!(table[1].name, "Caractéristiques du client");
    assert_eq!(table[1].rating, Rating::Moyen);
    assert_eq!(table[0].factors[0].name, "Pays A");
    assert_eq!(table[0].factors[0].profile, "Non spécifié");
    assert_invariants(&report);
}

#[test]
fn scenario_repeated_header_collapses() {
    let report = run(vec![sheet_with_rows("Client", &[
        ("Zone géographique", "", "Faible"),
        ("Pays A", "Maroc", "Faible"),
        ("Zone géographique", "", "Faible"),
        ("Pays B", "France", "Moyen"),
    ])]);
    let table = &report.clients[0].processed_risk_table;
    assert_eq!(table.len(), 1);
    let names: Vec<_> = table[0].factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Pays A", "Pays B"]);
    assert_eq!(table[0].rating, Rating::Moyen);
    assert_invariants(&report);
}

#[test]
fn scenario_unrated_factor_inherits_category_rating() {
    let report = run(vec![sheet_with_rows("Client", &[
        ("Réputation du client", "", "Élevé"),
        ("Presse négative", "Aucune", ""),
    ])]);
    let factor = &report.clients[0].processed_risk_table[0].factors[0];
    assert_eq!(factor.name, "Presse négative");
    assert_eq!(factor.profile, "Aucune");
    assert_eq!(factor.rating, Rating::Eleve);
}

#[test]
fn scenario_empty_category_gets_placeholder() {
    let report = run(vec![sheet_with_rows("Client", &[
        ("Canal de distribution", "", "Moyen"),
        ("Nature produits/opérations", "", "Faible"),
        ("Crédit", "Oui", "Faible"),
    ])]);
    let table = &report.clients[0].processed_risk_table;
    assert_eq!(table[0].factors.len(), 1);
    assert_eq!(table[0].factors[0].name, "Information non disponible");
    assert_eq!(table[0].factors[0].rating, Rating::Moyen);
    assert_eq!(table[1].factors[0].name, "Crédit");
    assert_invariants(&report);
}

#[test]
fn scenario_serial_update_date() {
    let sheet = sheet_with_rows("Client", &[("Zone géographique", "", "Faible")])
        .with(1, 7, "Date de MAJ")
        .with(1, 8, 45000.0);
    let report = run(vec![sheet]);
    assert_eq!(report.clients[0].update_date.as_deref(), Some("2023-03-15"));
    assert!(report.clients[0].data_quality.has_update_date);
}

#[test]
fn client_name_comes_from_the_header_not_the_table() {
    let sheet = sheet_with_rows("BAA", &[
        ("Zone géographique", "", "Faible"),
        ("Pays", "Maroc", "Faible"),
        ("Caractéristiques du client", "", "Moyen"),
        ("Secteur", "Banque", "Moyen"),
    ])
    .with(2, 1, "BANK AL AMAL");
    let report = run(vec![sheet]);
    let client = &report.clients[0];
    assert_eq!(client.name, "BANK AL AMAL");
    assert!(client.additional_info.is_empty());
}

#[test]
fn one_record_per_eligible_sheet() {
    let report = run(vec![
        sheet_with_rows("Guide", &[("Zone géographique", "", "Faible")]),
        sheet_with_rows("A", &[("Zone géographique", "", "Faible")]),
        Sheet::new("Tiny").with(9, 1, "x"),
        sheet_with_rows("B", &[("Canal de distribution", "", "Faible")]),
        sheet_with_rows("Profil de risque", &[]),
    ]);
    let sheets: Vec<_> = report.clients.iter().map(|c| c.sheet_name.as_str()).collect();
    assert_eq!(sheets, vec!["A", "B"]);
}

#[test]
fn misspelt_rating_is_folded_and_unknown_is_defaulted() {
    let report = run(vec![sheet_with_rows("Client", &[
        ("Zone géographique", "", "Elevé"),
        ("Pays", "Iran", "ÉLEVÉ!!"),
    ])]);
    let cat = &report.clients[0].processed_risk_table[0];
    assert_eq!(cat.rating, Rating::Eleve);
    assert_eq!(cat.factors[0].rating, Rating::Eleve);
    let json = report.to_json(false).unwrap();
    assert!(json.contains("\"Élevé\""));
    assert!(!json.contains("\"rating\":\"Elevé\""));
}

#[test]
fn pipeline_is_idempotent() {
    let build = || {
        vec![
            sheet_with_rows("A", &[
                ("Zone géographique", "Maroc", "Moyen"),
                ("Pays", "Maroc", "Élevé"),
                ("Pays", "Espagne", "Faible"),
            ])
            .with(2, 1, "BANK AL AMAL"),
        ]
    };
    let first = run(build()).to_json(true).unwrap();
    let second = run(build()).to_json(true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn merged_template_groups_by_merged_labels() {
    let sheet = Sheet::new("RMAM")
        .with(1, 1, "RED MED ASSET MANAGEMENT (CLIENT FILE)")
        .with(9, 1, "Zone géographique")
        .with(9, 2, "Pays de résidence").with(9, 4, "Maroc").with(9, 5, "Faible")
        .with(10, 2, "Nationalité").with(10, 4, "Marocaine").with(10, 5, "Moyen")
        .with(11, 1, "Canal de distribution").with(11, 5, "Faible")
        .with(27, 1, "Niveau risque").with(27, 2, "Moyen")
        .with_merge(MergedRegion::new(9, 1, 10, 1))
        .with_merge(MergedRegion::new(11, 1, 11, 2));
    let mut wb = InMemoryWorkbook::new(vec![sheet]);
    let opts = ExtractOptions::for_template(risk_scrape::TemplateKind::Merged);
    let mut diag = Collector::new();
    let report = process_workbook(&mut wb, &opts, &mut diag);

    let client = &report.clients[0];
    assert_eq!(client.name, "RED MED ASSET MANAGEMENT (CLIENT FILE)");
    assert_eq!(client.risk_level, Rating::Moyen);
    assert!(client.data_quality.has_valid_risk_level);
    let table = &client.processed_risk_table;
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].factors.len(), 2);
    assert_eq!(table[0].rating, Rating::Moyen);
    assert_eq!(table[1].factors[0].name, "Information non disponible");
    assert_invariants(&report);
    assert!(diag.finished);
}

#[test]
fn json_shape_uses_camel_case_and_null_dates() {
    let report = run(vec![sheet_with_rows("Client", &[("Zone géographique", "", "Faible")])]);
    let v: serde_json::Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();
    let c = &v["clients"][0];
    for key in [
        "name", "riskLevel", "updateDate", "assessmentDate", "processedRiskTable",
        "extractedRiskData", "knownCategories", "sheetName", "additionalInfo", "dataQuality",
    ] {
        assert!(c.get(key).is_some(), "missing {key}");
    }
    assert!(c["assessmentDate"].is_null());
    assert_eq!(c["extractedRiskData"][0]["kind"], "categoryHeader");
}
