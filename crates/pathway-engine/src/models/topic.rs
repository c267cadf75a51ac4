use std::fmt;

use uuid::Uuid;

/// Opaque identifier for a topic.
///
/// Unique within a session; regenerating a roadmap produces fresh ids even
/// for identical source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopicId(Uuid);

impl TopicId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single checklist item derived from a list-item line.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    /// Stable identity for UI references and toggling
    pub id: TopicId,
    /// Display text with the leading list marker stripped
    pub label: String,
    /// Completion flag, starts false at creation
    pub completed: bool,
}

impl Topic {
    /// Create a fresh, uncompleted topic with a new id
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            id: TopicId::new(),
            label: label.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_topic_starts_uncompleted() {
        let topic = Topic::new("Learn Rust");
        assert_eq!(topic.label, "Learn Rust");
        assert!(!topic.completed);
    }

    #[test]
    fn test_topic_ids_are_unique() {
        let a = Topic::new("one");
        let b = Topic::new("one");
        assert_ne!(a.id, b.id);
    }
}
