use crate::models::{Category, Topic};

use super::classify::LineClass;

/// Phase 2 of parsing: tracks the current milestone name while consuming
/// classified lines, then groups the collected topics into categories.
///
/// Grouping is global by name: every topic whose header name matches lands
/// in the same category, no matter how often or where the header repeats in
/// the source. Category order is the first-seen order of names.
pub struct RoadmapBuilder {
    current_category: String,
    /// (milestone name at creation time, topic) pairs in source order
    topics: Vec<(String, Topic)>,
}

impl RoadmapBuilder {
    /// Create a builder whose initial milestone name is the placeholder
    /// used for topics that appear before any header.
    pub fn new(default_category: &str) -> Self {
        Self {
            current_category: default_category.to_string(),
            topics: Vec::new(),
        }
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Heading { name } => self.current_category = name,
            LineClass::Topic { label } => {
                let topic = Topic::new(label);
                self.topics.push((self.current_category.clone(), topic));
            }
            LineClass::Blank | LineClass::Plain => {}
        }
    }

    /// Group collected topics by milestone name into ordered categories.
    pub fn finish(self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for (name, topic) in self.topics {
            match categories.iter_mut().find(|c| c.name == name) {
                Some(category) => category.topics.push(topic),
                None => categories.push(Category {
                    name,
                    topics: vec![topic],
                }),
            }
        }
        categories
    }
}
