//! Search field for the documentation tabs

use eframe::egui::{self, RichText};

use crate::app::RunbookApp;
use crate::core::session::Event;

/// Free-text filter over the active document's sections
pub struct SearchBar;

impl SearchBar {
    /// Show the search field, its Clear button and the status line
    pub fn show(ui: &mut egui::Ui, app: &mut RunbookApp) {
        let mut query = app.session.query().to_string();

        ui.horizontal(|ui| {
            let clear_width = if query.is_empty() { 0.0 } else { 64.0 };
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search commands, errors, or keywords...")
                    .desired_width(ui.available_width() - clear_width),
            );

            if app.focus_search {
                response.request_focus();
                app.focus_search = false;
            }

            if response.changed() {
                app.emit(Event::SetQuery(query.clone()));
            }

            if !query.is_empty() && ui.button("Clear").clicked() {
                app.emit(Event::ClearQuery);
            }
        });

        if !query.is_empty() {
            let hits = app.session.search_hits();
            ui.horizontal(|ui| {
                ui.label("\u{1F50D} Searching for:");
                ui.label(RichText::new(&query).strong().color(ui.visuals().hyperlink_color));
                ui.label(RichText::new(hits_label(hits)).weak());
            });
        }
    }
}

fn hits_label(hits: usize) -> String {
    match hits {
        1 => "(1 match)".to_string(),
        n => format!("({n} matches)"),
    }
}
