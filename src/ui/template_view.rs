//! Helm chart template workspace
//!
//! Shows the template selector and the Edit/Copy/Download actions, followed
//! by either a highlighted read-only view or a monospace editor over the
//! session's edit buffer.

use eframe::egui::{self, RichText};
use egui_extras::syntax_highlighting::{code_view_ui, CodeTheme};

use crate::app::RunbookApp;
use crate::core::session::{Event, TemplateMode};
use crate::core::template::TemplateKey;

pub struct TemplateView;

impl TemplateView {
    pub fn show(ui: &mut egui::Ui, app: &mut RunbookApp) {
        ui.add_space(8.0);
        ui.heading("Helm Chart Templates");
        ui.label(
            RichText::new(
                "View and edit your Helm chart templates. Click on any template to view or edit it.",
            )
            .weak(),
        );
        ui.add_space(8.0);

        Self::show_selector(ui, app);
        ui.add_space(6.0);
        Self::show_actions(ui, app);
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_salt("template_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if app.session.is_editing() {
                    Self::show_editor(ui, app);
                } else {
                    let key = app.session.template();
                    let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
                    code_view_ui(ui, &theme, key.text(), key.language());
                }
            });
    }

    /// One button per template, labelled with its export filename
    fn show_selector(ui: &mut egui::Ui, app: &mut RunbookApp) {
        let active = app.session.template();

        ui.horizontal_wrapped(|ui| {
            for key in TemplateKey::ALL {
                if ui
                    .selectable_label(active == key, key.filename())
                    .on_hover_text(format!("Template: {key}"))
                    .clicked()
                {
                    app.emit(Event::SelectTemplate(key));
                }
            }
        });
    }

    fn show_actions(ui: &mut egui::Ui, app: &mut RunbookApp) {
        let toggle_label = if app.session.is_editing() {
            "\u{1F441} View Mode"
        } else {
            "\u{270F} Edit Mode"
        };

        ui.horizontal(|ui| {
            if ui.button(toggle_label).clicked() {
                app.emit(Event::ToggleEdit);
            }
            if ui.button("\u{1F4CB} Copy").clicked() {
                app.emit(Event::Copy);
            }
            if ui.button("\u{2B07} Download").clicked() {
                app.emit(Event::Download);
            }
        });
    }

    fn show_editor(ui: &mut egui::Ui, app: &mut RunbookApp) {
        let TemplateMode::Editing { buffer } = app.session.mode() else {
            return;
        };
        let mut buffer = buffer.clone();

        let response = egui::TextEdit::multiline(&mut buffer)
            .font(egui::TextStyle::Monospace)
            .code_editor()
            .desired_width(f32::INFINITY)
            .desired_rows(30)
            .show(ui);

        if response.response.changed() {
            app.emit(Event::EditBuffer(buffer));
        }
    }
}
