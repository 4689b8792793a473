//! Runbook topics and their embedded documents

use std::fmt;

/// A documentation topic with its own tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Helm,
    Kubernetes,
    Terraform,
    ArgoCd,
    GitOps,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Helm,
        Topic::Kubernetes,
        Topic::Terraform,
        Topic::ArgoCd,
        Topic::GitOps,
    ];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Topic::Helm => "Helm Chart",
            Topic::Kubernetes => "Kubernetes",
            Topic::Terraform => "Terraform",
            Topic::ArgoCd => "ArgoCD",
            Topic::GitOps => "GitOps CI",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Topic::Helm => "\u{1F6A2}",
            Topic::Kubernetes => "\u{2638}",
            Topic::Terraform => "\u{1F3D7}",
            Topic::ArgoCd => "\u{1F504}",
            Topic::GitOps => "\u{1F680}",
        }
    }

    /// The static document for this topic
    pub fn document(self) -> Document {
        let text = match self {
            Topic::Helm => include_str!("../../assets/docs/helm.md"),
            Topic::Kubernetes => include_str!("../../assets/docs/kubernetes.md"),
            Topic::Terraform => include_str!("../../assets/docs/terraform.md"),
            Topic::ArgoCd => include_str!("../../assets/docs/argocd.md"),
            Topic::GitOps => include_str!("../../assets/docs/gitops.md"),
        };
        Document { topic: self, text }
    }
}

/// An immutable runbook document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub topic: Topic,
    pub text: &'static str,
}

impl Document {
    /// Title from the leading `# ` heading, falling back to the topic label
    pub fn title(&self) -> &'static str {
        self.text
            .lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(str::trim)
            .unwrap_or_else(|| self.topic.label())
    }
}

/// A top-level tab: one per topic, plus the template workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Docs(Topic),
    Templates,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Docs(Topic::Helm)
    }
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Docs(Topic::Helm),
        Tab::Docs(Topic::Kubernetes),
        Tab::Docs(Topic::Terraform),
        Tab::Docs(Topic::ArgoCd),
        Tab::Docs(Topic::GitOps),
        Tab::Templates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Docs(topic) => topic.label(),
            Tab::Templates => "Templates",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Docs(topic) => topic.icon(),
            Tab::Templates => "\u{1F4DD}",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_a_titled_document() {
        for topic in Topic::ALL {
            let doc = topic.document();
            assert_eq!(doc.topic, topic);
            assert!(doc.text.starts_with("# "), "{topic:?} lacks a title");
            assert!(doc.text.contains("\n## "), "{topic:?} has no sections");
        }
    }

    #[test]
    fn test_document_titles() {
        assert_eq!(Topic::Helm.document().title(), "Helm Chart Reference");
        assert_eq!(
            Topic::Kubernetes.document().title(),
            "Kubernetes Troubleshooting Runbook"
        );
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(Tab::default(), Tab::ALL[0]);
        assert_eq!(Tab::ALL[5], Tab::Templates);
        let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            ["Helm Chart", "Kubernetes", "Terraform", "ArgoCD", "GitOps CI", "Templates"]
        );
    }
}
