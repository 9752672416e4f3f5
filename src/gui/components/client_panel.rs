// src/gui/components/client_panel.rs
//
// Left list of processed clients; a click selects the one shown in the table.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Clients");
    ui.separator();

    if app.report.clients.is_empty() {
        ui.weak("None");
        return;
    }

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_salt("clients_panel_scroll")
        .show(ui, |ui| {
            for (idx, client) in app.report.clients.iter().enumerate() {
                let label = format!("{}  [{}]", client.name, client.risk_level);
                if ui
                    .selectable_label(idx == app.selected, label)
                    .on_hover_text(format!("sheet: {}", client.sheet_name))
                    .clicked()
                {
                    clicked = Some(idx);
                }
            }
        });

    if let Some(idx) = clicked {
        app.selected = idx;
        logd!("UI: selected client #{idx}");
    }
}
