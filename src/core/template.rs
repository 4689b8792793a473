//! Helm chart templates offered for viewing, editing and export

use std::fmt;

/// Key of a canonical Helm chart template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKey {
    #[default]
    Deployment,
    Service,
    Ingress,
    Hpa,
    ServiceAccount,
    Helpers,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::Deployment,
        TemplateKey::Service,
        TemplateKey::Ingress,
        TemplateKey::Hpa,
        TemplateKey::ServiceAccount,
        TemplateKey::Helpers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TemplateKey::Deployment => "deployment",
            TemplateKey::Service => "service",
            TemplateKey::Ingress => "ingress",
            TemplateKey::Hpa => "hpa",
            TemplateKey::ServiceAccount => "serviceaccount",
            TemplateKey::Helpers => "helpers",
        }
    }

    /// File name used for export and as the selector label
    pub fn filename(self) -> String {
        match self {
            TemplateKey::Helpers => "_helpers.tpl".to_string(),
            other => format!("{}.yaml", other.key()),
        }
    }

    /// Canonical template text. Never mutated; edits live in the session.
    pub fn text(self) -> &'static str {
        match self {
            TemplateKey::Deployment => include_str!("../../assets/templates/deployment.yaml"),
            TemplateKey::Service => include_str!("../../assets/templates/service.yaml"),
            TemplateKey::Ingress => include_str!("../../assets/templates/ingress.yaml"),
            TemplateKey::Hpa => include_str!("../../assets/templates/hpa.yaml"),
            TemplateKey::ServiceAccount => {
                include_str!("../../assets/templates/serviceaccount.yaml")
            }
            TemplateKey::Helpers => include_str!("../../assets/templates/_helpers.tpl"),
        }
    }

    /// Language hint for the code view
    pub fn language(self) -> &'static str {
        match self {
            TemplateKey::Helpers => "go",
            _ => "yaml",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
