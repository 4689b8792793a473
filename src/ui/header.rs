//! Title header

use eframe::egui::{self, Color32, RichText};

pub struct HeaderPanel;

impl HeaderPanel {
    pub fn show(ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(RichText::new("On Call Runbook").strong().size(26.0));
                ui.label(
                    RichText::new("Your Essential DevOps & Kubernetes Troubleshooting Guide")
                        .weak(),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::Frame::new()
                    .fill(Color32::from_rgb(30, 58, 138))
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::symmetric(10, 3))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                                .color(Color32::from_rgb(191, 219, 254)),
                        );
                    });
            });
        });
        ui.add_space(6.0);
    }
}
