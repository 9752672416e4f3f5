// src/gui/components/open_bar.rs
//
// Path field, template picker and the Open button.

use eframe::egui;

use crate::config::TemplateKind;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Workbook:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.path_text)
                .hint_text("path/to/risk.xlsx (or drop a file)")
                .desired_width(420.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        egui::ComboBox::from_id_salt("template")
            .selected_text(match app.template {
                TemplateKind::Standard => "standard",
                TemplateKind::Merged => "merged",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.template, TemplateKind::Standard, "standard");
                ui.selectable_value(&mut app.template, TemplateKind::Merged, "merged");
            });

        let can_open = !app.path_text.trim().is_empty();
        if (ui.add_enabled(can_open, egui::Button::new("Open")).clicked() || enter) && can_open {
            app.open();
        }
    });
}
