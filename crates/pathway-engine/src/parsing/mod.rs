//! Roadmap markdown parsing.
//!
//! Parsing runs in two phases: [`classify::RoadmapLineClassifier`] reduces
//! each line to local facts, and [`builder::RoadmapBuilder`] consumes those
//! facts in order, tracking the current milestone and grouping topics by
//! milestone name. The parser never fails: lines that are neither headers
//! nor list items are silently dropped.

pub mod builder;
pub mod classify;

use crate::models::{DEFAULT_CATEGORY, Roadmap};

use builder::RoadmapBuilder;
use classify::RoadmapLineClassifier;

/// Parse roadmap markdown into categories of topics.
///
/// Topics appearing before any header land in the [`DEFAULT_CATEGORY`].
pub fn parse(text: &str) -> Roadmap {
    parse_with_default(text, DEFAULT_CATEGORY)
}

/// Parse with a caller-chosen placeholder name for headerless topics.
pub fn parse_with_default(text: &str, default_category: &str) -> Roadmap {
    let classifier = RoadmapLineClassifier;
    let mut builder = RoadmapBuilder::new(default_category);

    for line in text.lines() {
        builder.push(classifier.classify(line));
    }

    let roadmap = Roadmap {
        categories: builder.finish(),
    };
    log::debug!(
        "parsed {} categories with {} topics",
        roadmap.category_count(),
        roadmap.topic_count()
    );
    roadmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headers_group_following_topics() {
        let roadmap = parse("# A\n- one\n- two\n# B\n- three");

        let names: Vec<&str> = roadmap.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        let a_labels: Vec<&str> = roadmap.categories[0]
            .topics
            .iter()
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(a_labels, vec!["one", "two"]);
        assert_eq!(roadmap.categories[1].topics[0].label, "three");
        assert_eq!(roadmap.progress(), 0);
    }

    #[test]
    fn test_empty_input_yields_empty_roadmap() {
        let roadmap = parse("");
        assert!(roadmap.is_empty());
        assert_eq!(roadmap.progress(), 0);
    }

    #[test]
    fn test_input_without_markers_yields_empty_roadmap() {
        let roadmap = parse("prose only\nmore prose\n\nstill nothing");
        assert!(roadmap.is_empty());
    }

    #[test]
    fn test_garbage_input_parses_without_panicking() {
        let roadmap = parse("\u{0}\u{1}binary\r\n\t###\u{fffd}\n-\u{7f} junk");
        // Whatever survives classification is still a valid roadmap
        assert!(roadmap.topic_count() <= 2);
    }

    #[test]
    fn test_numbered_marker_is_recognized() {
        let roadmap = parse("1. first");
        assert_eq!(roadmap.categories[0].topics[0].label, "first");
    }

    #[test]
    fn test_duplicate_header_with_no_intervening_topics() {
        let roadmap = parse("# Stage\n# Stage\n- x");

        assert_eq!(roadmap.category_count(), 1);
        assert_eq!(roadmap.categories[0].name, "Stage");
        assert_eq!(roadmap.categories[0].topics[0].label, "x");
    }

    #[test]
    fn test_custom_default_category_name() {
        let roadmap = parse_with_default("- orphan", "Backlog");
        assert_eq!(roadmap.categories[0].name, "Backlog");
    }

    #[test]
    fn test_reparse_produces_same_structure_with_fresh_ids() {
        let text = "# A\n- one\n- two";
        let first = parse(text);
        let second = parse(text);

        let shape = |r: &Roadmap| -> Vec<(String, Vec<String>)> {
            r.categories
                .iter()
                .map(|c| (c.name.clone(), c.topics.iter().map(|t| t.label.clone()).collect()))
                .collect()
        };
        assert_eq!(shape(&first), shape(&second));

        let first_ids: Vec<_> = first.topics().map(|t| t.id).collect();
        let second_ids: Vec<_> = second.topics().map(|t| t.id).collect();
        assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
    }
}
