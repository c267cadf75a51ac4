use std::sync::OnceLock;

use regex::Regex;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// Header line. Sets the current milestone name; creates no topic.
    Heading { name: String },
    /// List-item line. Creates a topic under the current milestone.
    Topic { label: String },
    /// Whitespace-only line, discarded entirely.
    Blank,
    /// Any other line, ignored.
    Plain,
}

/// Classifies individual lines of roadmap markdown.
pub struct RoadmapLineClassifier;

impl RoadmapLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Headers are any lines starting with `#` after trimming; list items
    /// start with `-`, `*`, or an ordered marker like `1.`. The extracted
    /// name/label has the marker run and surrounding whitespace stripped.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        if trimmed.starts_with('#') {
            let name = trimmed.trim_start_matches('#').trim().to_string();
            return LineClass::Heading { name };
        }

        if trimmed.starts_with('-') || trimmed.starts_with('*') || ordered_marker().is_match(trimmed)
        {
            let label = trimmed
                .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '-' | '*' | '.'))
                .trim()
                .to_string();
            return LineClass::Topic { label };
        }

        LineClass::Plain
    }
}

fn ordered_marker() -> &'static Regex {
    static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER.get_or_init(|| Regex::new(r"^\d+\.").expect("Invalid ordered-marker regex"))
}
