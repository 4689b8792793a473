//! Section outline of the displayed document
//!
//! Headings are pulled out with pulldown-cmark so that `#` lines inside fenced
//! code blocks (shell comments, mostly) are not mistaken for sections.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A heading listed in the outline panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Collect level-2 and level-3 headings in document order
pub fn outline(markdown: &str) -> Vec<Heading> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                if matches!(level, HeadingLevel::H2 | HeadingLevel::H3) {
                    current = Some((level as u8, String::new()));
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, ref mut buf)) = current {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        headings.push(Heading { level, text });
                    }
                }
            }
            _ => {}
        }
    }

    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_levels() {
        let md = concat!(
            "# Title\n\n## Pod Issues\n\n### OOMKilled (Out of Memory)\n\n",
            "#### Deep\n\n## Quick `kubectl` Reference\n",
        );
        let headings = outline(md);
        assert_eq!(
            headings,
            vec![
                Heading { level: 2, text: "Pod Issues".into() },
                Heading { level: 3, text: "OOMKilled (Out of Memory)".into() },
                Heading { level: 2, text: "Quick kubectl Reference".into() },
            ]
        );
    }

    #[test]
    fn test_code_comments_are_not_headings() {
        let md = concat!(
            "## Install\n\n```bash\n# Create namespace\n## not a heading\n",
            "kubectl create namespace argocd\n```\n",
        );
        let headings = outline(md);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Install");
    }

    #[test]
    fn test_placeholder_has_no_sections() {
        let placeholder = crate::core::filter::no_results("zzz");
        assert!(outline(&placeholder).is_empty());
    }
}
