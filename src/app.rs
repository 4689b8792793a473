//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::{AppConfig, Theme};
use crate::core::export;
use crate::core::session::{Effect, Event, Session};
use crate::core::topic::Tab;
use crate::ui::{
    document_view::DocumentView, header::HeaderPanel, outline::OutlinePanel,
    search_bar::SearchBar, tab_bar::TabBar, template_view::TemplateView,
};

const FOOTER: &str =
    "\u{1F6A8} Made with \u{2764} for On-Call Engineers \u{2022} Your 3 AM Best Friend";

/// Main application state
pub struct RunbookApp {
    /// Browsing session, replaced on every event
    pub session: Session,
    /// Application configuration
    pub config: AppConfig,
    /// Active color scheme
    pub theme: Theme,
    /// Whether the outline panel is visible
    pub outline_visible: bool,
    /// Request keyboard focus for the search field on the next frame
    pub focus_search: bool,
    /// Commonmark cache for the document view
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
    /// Events raised by widgets during the current frame
    pending: Vec<Event>,
}

impl RunbookApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_zoom_factor(config.zoom_factor());
        Self::apply_theme(&cc.egui_ctx, config.ui.theme);

        Self {
            session: Session::new(),
            theme: config.ui.theme,
            outline_visible: config.ui.show_outline,
            config,
            focus_search: false,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
            pending: Vec::new(),
        }
    }

    fn apply_theme(ctx: &egui::Context, theme: Theme) {
        let visuals = match theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    /// Queue an event for the end of the frame
    pub fn emit(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Reduce queued events in order and run their effects
    fn dispatch_pending(&mut self, ctx: &egui::Context) {
        if self.pending.is_empty() {
            return;
        }

        for event in std::mem::take(&mut self.pending) {
            tracing::debug!("Event: {:?}", event);
            let (session, effect) = std::mem::take(&mut self.session).reduce(event);
            self.session = session;
            if let Some(effect) = effect {
                self.run_effect(ctx, effect);
            }
        }
        ctx.request_repaint();
    }

    fn run_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::Copy(text) => {
                tracing::info!("Copied {} bytes to clipboard", text.len());
                ctx.copy_text(text);
            }
            Effect::Download { filename, contents } => {
                let start_dir = self.config.export.directory.as_deref();
                match export::save_with_dialog(&filename, &contents, start_dir) {
                    Ok(Some(path)) => {
                        tracing::info!("Downloaded {} to {}", filename, path.display())
                    }
                    Ok(None) => {}
                    Err(e) => tracing::error!("Failed to export template: {}", e),
                }
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let on_templates = self.session.on_templates();
                    if ui
                        .add_enabled(on_templates, egui::Button::new("Download Template..."))
                        .clicked()
                    {
                        self.emit(Event::Download);
                        ui.close();
                    }
                    if ui
                        .add_enabled(on_templates, egui::Button::new("Copy Template"))
                        .clicked()
                    {
                        self.emit(Event::Copy);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Outline").clicked() {
                        self.outline_visible = !self.outline_visible;
                        ui.close();
                    }
                    ui.separator();
                    let themes = [(Theme::Dark, "Dark Theme"), (Theme::Light, "Light Theme")];
                    for (theme, label) in themes {
                        if ui.selectable_label(self.theme == theme, label).clicked() {
                            self.theme = theme;
                            Self::apply_theme(ctx, theme);
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let on_templates = self.session.on_templates();
        let has_query = !self.session.query().is_empty();

        ctx.input(|i| {
            if i.modifiers.command && i.key_pressed(egui::Key::F) && !on_templates {
                self.focus_search = true;
            }
            if i.key_pressed(egui::Key::Escape) && has_query {
                self.pending.push(Event::ClearQuery);
            }
            if i.modifiers.command && i.key_pressed(egui::Key::B) {
                self.outline_visible = !self.outline_visible;
            }
            if on_templates && i.modifiers.command && i.key_pressed(egui::Key::E) {
                self.pending.push(Event::ToggleEdit);
            }
            if on_templates && i.modifiers.command && i.key_pressed(egui::Key::S) {
                self.pending.push(Event::Download);
            }
        });
    }
}

impl eframe::App for RunbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        self.render_menu_bar(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            HeaderPanel::show(ui);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small(FOOTER);
            });
        });

        if self.outline_visible && !self.session.on_templates() {
            egui::SidePanel::right("outline")
                .resizable(true)
                .default_width(240.0)
                .min_width(160.0)
                .show(ctx, |ui| {
                    OutlinePanel::show(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.session.on_templates() {
                SearchBar::show(ui, self);
                ui.add_space(8.0);
            }

            TabBar::show(ui, self);
            ui.separator();

            match self.session.tab() {
                Tab::Docs(_) => DocumentView::show(ui, self),
                Tab::Templates => TemplateView::show(ui, self),
            }
        });

        self.dispatch_pending(ctx);
    }
}
