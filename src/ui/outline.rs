//! Section outline side panel

use eframe::egui::{self, RichText};

use crate::app::RunbookApp;
use crate::core::outline::outline;
use crate::core::session::Event;

/// Lists the headings of the displayed document.
/// Clicking one searches for its title, narrowing the view to that section.
pub struct OutlinePanel;

impl OutlinePanel {
    pub fn show(ui: &mut egui::Ui, app: &mut RunbookApp) {
        let headings = outline(&app.session.display_text());

        ui.heading("Sections");
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("outline_scroll")
            .show(ui, |ui| {
                if headings.is_empty() {
                    ui.label(RichText::new("No sections").weak());
                    return;
                }

                for heading in headings {
                    ui.horizontal(|ui| {
                        if heading.level > 2 {
                            ui.add_space(14.0);
                        }
                        let label = if heading.level == 2 {
                            RichText::new(&heading.text).strong()
                        } else {
                            RichText::new(&heading.text)
                        };
                        if ui.selectable_label(false, label).clicked() {
                            app.emit(Event::SetQuery(heading.text.clone()));
                        }
                    });
                }
            });
    }
}
