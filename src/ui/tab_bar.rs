//! Topic tabs

use eframe::egui;

use crate::app::RunbookApp;
use crate::core::session::Event;
use crate::core::topic::Tab;

pub struct TabBar;

impl TabBar {
    pub fn show(ui: &mut egui::Ui, app: &mut RunbookApp) {
        let active = app.session.tab();

        egui::ScrollArea::horizontal()
            .id_salt("tab_bar_scroll")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for tab in Tab::ALL {
                        let mut response = ui.selectable_label(active == tab, tab.to_string());
                        if let Tab::Docs(topic) = tab {
                            response = response.on_hover_text(topic.document().title());
                        }
                        if response.clicked() && active != tab {
                            app.emit(Event::SelectTab(tab));
                        }
                    }
                });
            });
    }
}
