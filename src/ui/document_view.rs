//! Rendered runbook document using egui_commonmark

use eframe::egui;
use egui_commonmark::CommonMarkViewer;

use crate::app::RunbookApp;

/// Markdown view of the filtered active document
pub struct DocumentView;

impl DocumentView {
    pub fn show(ui: &mut egui::Ui, app: &mut RunbookApp) {
        let content = app.session.display_text();

        egui::ScrollArea::vertical()
            .id_salt("document_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                CommonMarkViewer::new().show(ui, &mut app.commonmark_cache, &content);
            });
    }
}
