// src/gui/components/risk_table.rs
//
// Header facts of the selected client, then one table row per factor.
// Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::core::Rating;
use crate::gui::app::App;

fn rating_color(r: Rating) -> egui::Color32 {
    match r {
        Rating::Faible => egui::Color32::from_rgb(60, 140, 60),
        Rating::Moyen => egui::Color32::from_rgb(200, 140, 20),
        Rating::Eleve => egui::Color32::from_rgb(200, 50, 40),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(client) = app.selected_client() else {
        ui.centered_and_justified(|ui| ui.weak("No client selected"));
        return;
    };

    ui.horizontal(|ui| {
        ui.heading(&client.name);
        ui.label(RichText::new(client.risk_level.as_str()).strong().color(rating_color(client.risk_level)));
    });
    ui.horizontal(|ui| {
        ui.label(format!("Mise à jour: {}", client.update_date.as_deref().unwrap_or("-")));
        ui.separator();
        ui.label(format!("EER: {}", client.assessment_date.as_deref().unwrap_or("-")));
        for (k, v) in &client.additional_info {
            ui.separator();
            ui.label(format!("{k}: {v}"));
        }
    });
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::initial(200.0).at_least(80.0).clip(true))
        .column(Column::initial(220.0).at_least(80.0).clip(true))
        .column(Column::remainder().at_least(120.0).clip(true))
        .column(Column::exact(70.0))
        .header(22.0, |mut header| {
            for title in ["Catégorie", "Facteur", "Profil", "Niveau"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for cat in &client.processed_risk_table {
                for (i, factor) in cat.factors.iter().enumerate() {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            if i == 0 {
                                ui.label(
                                    RichText::new(format!("{} ({})", cat.name, cat.rating))
                                        .strong()
                                        .color(rating_color(cat.rating)),
                                );
                            }
                        });
                        row.col(|ui| {
                            ui.label(&factor.name);
                        });
                        row.col(|ui| {
                            ui.label(&factor.profile);
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(factor.rating.as_str()).color(rating_color(factor.rating)));
                        });
                    });
                }
            }
        });

    if !app.warnings.is_empty() {
        ui.separator();
        ui.collapsing(format!("Warnings ({})", app.warnings.len()), |ui| {
            for w in &app.warnings {
                ui.label(w);
            }
        });
    }
}
