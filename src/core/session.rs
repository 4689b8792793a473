//! Browser session state and the event reducer that advances it
//!
//! The session is a plain value. Each user event consumes the current state
//! and yields the next one, plus at most one [`Effect`] for the platform layer
//! to carry out (clipboard write or file export).

use std::borrow::Cow;

use super::filter;
use super::template::TemplateKey;
use super::topic::Tab;

/// How the active template is presented
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateMode {
    #[default]
    Viewing,
    /// Editing a scratch copy; the canonical template stays untouched
    Editing { buffer: String },
}

/// A user interaction with the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectTab(Tab),
    SetQuery(String),
    ClearQuery,
    SelectTemplate(TemplateKey),
    ToggleEdit,
    EditBuffer(String),
    Copy,
    Download,
}

/// Platform side effect requested by a reduced event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Copy(String),
    Download { filename: String, contents: String },
}

/// All state owned by one browsing session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    tab: Tab,
    query: String,
    template: TemplateKey,
    mode: TemplateMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume an event and produce the next session state
    pub fn reduce(self, event: Event) -> (Session, Option<Effect>) {
        match event {
            Event::SelectTab(tab) => (
                Session {
                    tab,
                    query: String::new(),
                    ..self
                },
                None,
            ),
            Event::SetQuery(query) => (Session { query, ..self }, None),
            Event::ClearQuery => (
                Session {
                    query: String::new(),
                    ..self
                },
                None,
            ),
            Event::SelectTemplate(template) => (
                Session {
                    template,
                    mode: TemplateMode::Viewing,
                    ..self
                },
                None,
            ),
            Event::ToggleEdit => {
                let mode = match self.mode {
                    TemplateMode::Viewing => TemplateMode::Editing {
                        buffer: self.template.text().to_string(),
                    },
                    TemplateMode::Editing { .. } => TemplateMode::Viewing,
                };
                (Session { mode, ..self }, None)
            }
            Event::EditBuffer(buffer) => match self.mode {
                TemplateMode::Editing { .. } => (
                    Session {
                        mode: TemplateMode::Editing { buffer },
                        ..self
                    },
                    None,
                ),
                TemplateMode::Viewing => (self, None),
            },
            Event::Copy => {
                let effect = self
                    .on_templates()
                    .then(|| Effect::Copy(self.template_text().to_string()));
                (self, effect)
            }
            Event::Download => {
                let effect = self.on_templates().then(|| Effect::Download {
                    filename: self.template.filename(),
                    contents: self.template_text().to_string(),
                });
                (self, effect)
            }
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn template(&self) -> TemplateKey {
        self.template
    }

    pub fn mode(&self) -> &TemplateMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, TemplateMode::Editing { .. })
    }

    pub fn on_templates(&self) -> bool {
        self.tab == Tab::Templates
    }

    /// Text of the active template: the edit buffer while editing
    pub fn template_text(&self) -> &str {
        match &self.mode {
            TemplateMode::Editing { buffer } => buffer,
            TemplateMode::Viewing => self.template.text(),
        }
    }

    /// Query occurrences in the displayed sections. Zero on the templates tab.
    pub fn search_hits(&self) -> usize {
        match self.tab {
            Tab::Docs(topic) => filter::search_hits(topic.document().text, &self.query),
            Tab::Templates => 0,
        }
    }

    /// The filtered document for the active tab. Empty on the templates tab.
    pub fn display_text(&self) -> Cow<'static, str> {
        match self.tab {
            Tab::Docs(topic) => filter::filter(topic.document().text, &self.query),
            Tab::Templates => Cow::Borrowed(""),
        }
    }
}
