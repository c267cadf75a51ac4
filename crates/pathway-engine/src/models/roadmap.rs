use crate::models::{Topic, TopicId};

/// Category name used for topics that appear before any header line.
pub const DEFAULT_CATEGORY: &str = "General";

/// A named milestone grouping of topics, derived from a header line.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    /// Topics in order of appearance in the source text
    pub topics: Vec<Topic>,
}

/// The full ordered collection of categories produced by one parse.
///
/// Categories appear in first-seen order of their names. All completion
/// state lives here; a fresh parse discards it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roadmap {
    pub categories: Vec<Category>,
}

impl Roadmap {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of milestones
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of topics across all categories
    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }

    /// Number of completed topics across all categories
    pub fn completed_count(&self) -> usize {
        self.topics().filter(|t| t.completed).count()
    }

    /// Iterate over all topics in category order
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.categories.iter().flat_map(|c| c.topics.iter())
    }

    /// Flip the completion flag of the topic with the given id.
    ///
    /// Returns false when no topic matches; other topics are never touched.
    pub fn toggle_topic(&mut self, id: TopicId) -> bool {
        for category in &mut self.categories {
            if let Some(topic) = category.topics.iter_mut().find(|t| t.id == id) {
                topic.completed = !topic.completed;
                return true;
            }
        }
        false
    }

    /// Completion percentage over all topics, rounded to the nearest whole
    /// number. Zero topics yields 0 rather than a division by zero.
    pub fn progress(&self) -> u8 {
        let total = self.topic_count();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_count();
        ((completed as f64 / total as f64) * 100.0).round() as u8
    }
}
