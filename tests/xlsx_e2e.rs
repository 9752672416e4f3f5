// tests/xlsx_e2e.rs
//
// Workbooks are written with rust_xlsxwriter, then read back through calamine.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};

use risk_scrape::diag::{Collector, NullDiagnostics};
use risk_scrape::source::{CalamineWorkbook, WorkbookSource};
use risk_scrape::{process_excel_file, try_process_excel_file, Error, ExtractOptions, Rating, TemplateKind};

/// Merged template: category labels merged down A, factor names in B.
/// rust_xlsxwriter rows/cols are 0-based.
fn write_merged_fixture(path: &Path) -> Result<(), XlsxError> {
    let mut wb = Workbook::new();
    let plain = Format::new();
    let date = Format::new().set_num_format("yyyy-mm-dd");

    let guide = wb.add_worksheet();
    guide.set_name("Instructions")?;
    guide.write_string(0, 0, "Remplir une feuille par client")?;
    guide.write_string(20, 0, "Fin")?;

    let ws = wb.add_worksheet();
    ws.set_name("RMAM")?;
    ws.write_string(0, 0, "RED MED ASSET MANAGEMENT - FICHE CLIENT")?;
    ws.write_string(0, 6, "Date de MAJ")?;
    ws.write_datetime_with_format(0, 7, &ExcelDateTime::from_ymd(2024, 1, 15)?, &date)?;
    ws.write_string(2, 6, "Date d'EER")?;
    ws.write_number(2, 7, 45000.0)?;

    ws.merge_range(8, 0, 10, 0, "Zone géographique", &plain)?;
    ws.write_string(8, 1, "Pays de résidence")?;
    ws.write_string(8, 3, "Maroc")?;
    ws.write_string(8, 4, "Faible")?;
    ws.write_string(9, 1, "Nationalité")?;
    ws.write_string(9, 3, "Marocaine")?;
    ws.write_string(9, 4, "Moyen")?;
    ws.write_string(10, 1, "Pays de résidence")?;
    ws.write_string(10, 3, "France")?;
    ws.write_string(10, 4, "Élevé")?;

    ws.merge_range(11, 0, 12, 0, "Caractéristiques du client", &plain)?;
    ws.write_string(11, 1, "Secteur d'activité")?;
    ws.write_string(11, 3, "Banque")?;
    ws.write_string(11, 4, "Elevé")?;
    ws.write_string(12, 1, "Forme juridique")?;
    ws.merge_range(12, 2, 12, 3, "SA", &plain)?;
    ws.write_string(12, 4, "Faible")?;

    ws.merge_range(13, 0, 13, 1, "Canal de distribution", &plain)?;
    ws.write_string(13, 4, "Moyen")?;

    ws.write_string(26, 0, "Niveau risque")?;
    ws.write_string(26, 1, "Élevé")?;

    let notes = wb.add_worksheet();
    notes.set_name("Notes")?;
    notes.write_string(0, 0, "brouillon")?;

    wb.save(path)
}

fn fixture(dir: &Path) -> PathBuf {
    let path = dir.join("risques.xlsx");
    write_merged_fixture(&path).unwrap();
    path
}

#[test]
fn calamine_source_keeps_positions_and_merges() {
    let tmp = tempfile::tempdir().unwrap();
    let mut wb = CalamineWorkbook::open(&fixture(tmp.path())).unwrap();
    assert_eq!(wb.sheet_names(), vec!["Instructions", "RMAM", "Notes"]);

    let sheet = wb.load_sheet("RMAM").unwrap();
    assert_eq!(sheet.text(9, 1), "Zone géographique");
    assert!(sheet.get(10, 1).is_empty());
    assert_eq!(sheet.max_row(), 27);
    assert!(sheet.merged_regions().iter().any(|m| m.anchor() == (9, 1) && m.max_row == 11));
    assert_eq!(sheet.text(1, 8), "2024-01-15");
}

#[test]
fn merged_workbook_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let path = fixture(tmp.path());
    let opts = ExtractOptions::for_template(TemplateKind::Merged);
    let mut diag = Collector::new();
    let report = try_process_excel_file(&path, &opts, &mut diag).unwrap();

    assert_eq!(report.clients.len(), 1);
    let client = &report.clients[0];
    assert_eq!(client.sheet_name, "RMAM");
    assert_eq!(client.name, "RED MED ASSET MANAGEMENT - FICHE CLIENT");
    assert_eq!(client.risk_level, Rating::Eleve);
    assert_eq!(client.update_date.as_deref(), Some("2024-01-15"));
    assert_eq!(client.assessment_date.as_deref(), Some("2023-03-15"));

    let table = &client.processed_risk_table;
    let names: Vec<_> = table.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zone géographique", "Caractéristiques du client", "Canal de distribution"]);

    let zone = &table[0];
    let factors: Vec<_> = zone.factors.iter().map(|f| (f.name.as_str(), f.profile.as_str())).collect();
    assert_eq!(factors, vec![("Pays de résidence", "Maroc"), ("Nationalité", "Marocaine")]);
    assert_eq!(zone.rating, Rating::Moyen);

    let carac = &table[1];
    assert_eq!(carac.rating, Rating::Eleve);
    assert_eq!(carac.factors[1].name, "Forme juridique");
    assert_eq!(carac.factors[1].profile, "SA");

    let canal = &table[2];
    assert_eq!(canal.factors.len(), 1);
    assert_eq!(canal.factors[0].name, "Information non disponible");
    assert_eq!(canal.rating, Rating::Moyen);

    assert_eq!(client.data_quality.categories_found, 3);
    assert_eq!(client.data_quality.factors_found, 5);
    assert!(diag.finished);
    assert!(diag.sheets.contains(&"Notes".to_string()));
}

#[test]
fn corrupt_file_is_a_file_level_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("corrupt.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let err = try_process_excel_file(&path, &ExtractOptions::default(), &mut NullDiagnostics).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));

    let report = process_excel_file(&path, &ExtractOptions::default(), &mut NullDiagnostics);
    assert!(report.clients.is_empty());
}
