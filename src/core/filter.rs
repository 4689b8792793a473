//! Section-level search over runbook documents
//!
//! A document is split on its second-level headings. Searching keeps every
//! section whose text contains the query, ignoring case, and drops the rest.

use std::borrow::Cow;

/// Separator between sections: a newline followed by a level-2 heading marker
pub const SECTION_MARKER: &str = "\n## ";

/// Heading marker restored on every section but the preamble
const HEADING_PREFIX: &str = "## ";

/// Split a document into its preamble and heading sections.
///
/// Section 0 is everything before the first level-2 heading. Later sections
/// start with the heading text, without the `## ` marker.
pub fn split_sections(document: &str) -> impl Iterator<Item = &str> {
    document.split(SECTION_MARKER)
}

/// Filter a document down to the sections matching `query`.
///
/// An empty query returns the document untouched. When nothing matches, the
/// "no results" placeholder is returned instead.
pub fn filter<'a>(document: &'a str, query: &str) -> Cow<'a, str> {
    if query.is_empty() {
        return Cow::Borrowed(document);
    }

    let needle = query.to_lowercase();
    let matching: Vec<String> = split_sections(document)
        .enumerate()
        .filter(|(_, section)| section.to_lowercase().contains(&needle))
        .map(|(index, section)| {
            if index == 0 {
                section.to_string()
            } else {
                format!("{HEADING_PREFIX}{section}")
            }
        })
        .collect();

    if matching.is_empty() {
        return Cow::Owned(no_results(query));
    }

    Cow::Owned(matching.join("\n"))
}

/// Placeholder document shown when a query matches no section
pub fn no_results(query: &str) -> String {
    format!(
        "# No results found for \"{query}\"\n\n\
         Try searching for:\n\
         - Command names (kubectl, helm, terraform)\n\
         - Error messages\n\
         - Resource types (pod, service, deployment)\n\
         - Keywords (crash, sync, deploy)"
    )
}

/// Number of query occurrences that [`filter`] would display.
///
/// Counted per section, so an occurrence straddling a heading boundary is not
/// a hit, and the quoted query in the "no results" placeholder never is.
pub fn search_hits(document: &str, query: &str) -> usize {
    split_sections(document)
        .map(|section| count_matches(section, query))
        .sum()
}

/// Count case-insensitive occurrences of `query` in `text`
pub fn count_matches(text: &str, query: &str) -> usize {
    if query.is_empty() {
        return 0;
    }

    let pattern = regex_lite::escape(query);
    match regex_lite::RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).count(),
        Err(e) => {
            tracing::warn!("Could not build match counter for {:?}: {}", query, e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = concat!(
        "# Runbook\nIntro text.\n\n",
        "## Pod Issues\n\n### CrashLoopBackOff\nkubectl logs pod\n\n",
        "## Storage Issues\n\nPersistentVolumeClaim stuck in Pending",
    );

    #[test]
    fn test_empty_query_returns_document() {
        let result = filter(DOC, "");
        assert_eq!(result, DOC);
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_split_sections_keeps_preamble_first() {
        let sections: Vec<_> = split_sections(DOC).collect();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0], "# Runbook\nIntro text.\n");
        assert!(sections[1].starts_with("Pod Issues"));
        assert!(sections[2].starts_with("Storage Issues"));
    }

    #[test]
    fn test_crash_keeps_only_pod_section() {
        let result = filter(DOC, "crash");
        assert!(result.starts_with("## Pod Issues"));
        assert!(result.contains("CrashLoopBackOff"));
        assert!(!result.contains("Storage Issues"));
    }

    #[test]
    fn test_preamble_match_keeps_headings_of_later_sections() {
        let result = filter(DOC, "runbook");
        assert_eq!(result, "# Runbook\nIntro text.\n");

        let result = filter(DOC, "i");
        assert_eq!(result, DOC);
    }

    #[test]
    fn test_heading_marker_restored_when_preamble_misses() {
        let result = filter(DOC, "pending");
        assert_eq!(result, "## Storage Issues\n\nPersistentVolumeClaim stuck in Pending");
    }

    #[test]
    fn test_matches_in_order() {
        let result = filter(DOC, "issues");
        let pod = result.find("## Pod Issues").unwrap();
        let storage = result.find("## Storage Issues").unwrap();
        assert!(pod < storage);
        assert!(!result.contains("Intro text"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(filter(DOC, "POD"), filter(DOC, "pod"));
        assert_eq!(filter(DOC, "CrAsH"), filter(DOC, "crash"));
    }

    #[test]
    fn test_verbatim_query_survives_filtering() {
        for query in ["kubectl logs", "Pending", "Intro", "### Crash"] {
            assert!(filter(DOC, query).contains(query), "query {query:?}");
        }
    }

    #[test]
    fn test_no_match_returns_placeholder() {
        let result = filter(DOC, "terraform");
        assert_eq!(result, no_results("terraform"));
        assert!(result.starts_with("# No results found for \"terraform\""));
        assert!(result.contains("- Keywords (crash, sync, deploy)"));
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        assert_eq!(filter("# A\n## B", "   "), no_results("   "));
        assert!(filter(DOC, " ").contains("Intro text."));
    }

    #[test]
    fn test_no_fuzzy_matching() {
        assert_eq!(filter(DOC, "crashloop backoff"), no_results("crashloop backoff"));
    }

    #[test]
    fn test_filter_is_not_cumulative() {
        let first = filter(DOC, "storage").into_owned();
        let _ = filter(DOC, "crash");
        assert_eq!(filter(DOC, "storage"), first);
    }

    #[test]
    fn test_count_matches() {
        assert_eq!(count_matches(DOC, "issues"), 2);
        assert_eq!(count_matches(DOC, "ISSUES"), 2);
        assert_eq!(count_matches(DOC, "pod"), 2);
        assert_eq!(count_matches(DOC, ""), 0);
        assert_eq!(count_matches("a.b axb", "."), 1);
        assert_eq!(count_matches("f(x) f(x)", "f(x)"), 2);
    }

    #[test]
    fn test_search_hits_zero_when_nothing_matches() {
        let doc = "# A\nintro\n## B\nbody";
        assert_eq!(filter(doc, "zzz"), no_results("zzz"));
        assert_eq!(search_hits(doc, "zzz"), 0);
        assert_eq!(search_hits(DOC, "terraform"), 0);
    }

    #[test]
    fn test_search_hits_across_heading_boundary() {
        // Present in the raw text, but inside no single section
        let query = "intro text.\n\n## pod";
        assert_eq!(filter(DOC, query), no_results(query));
        assert_eq!(search_hits(DOC, query), 0);
    }

    #[test]
    fn test_search_hits_count_displayed_occurrences() {
        assert_eq!(search_hits(DOC, "issues"), 2);
        assert_eq!(search_hits(DOC, "CRASH"), 1);
        assert_eq!(search_hits(DOC, ""), 0);
    }
}
