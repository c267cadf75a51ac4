//! Session state for the roadmap viewer.
//!
//! A [`Session`] is the single owner of everything the UI shows: the raw
//! markdown text, the roadmap parsed from it, and which of the two views is
//! active. All operations are synchronous and infallible; the UI event loop
//! is the only caller.

use crate::models::{DEFAULT_CATEGORY, Roadmap, TopicId};
use crate::parsing;

/// Starter roadmap preloaded into new sessions so the app has something to
/// demonstrate before the user pastes their own.
pub const SAMPLE_MARKDOWN: &str = "\
# Frontend Mastery
- Learn HTML & CSS Basics
- Master Flexbox and Grid
- JavaScript ES6+ Features

# React Framework
- Hooks (useState, useEffect)
- Component Lifecycle
- State Management (Signals/Context)

# Advanced Tools
- Tailwind CSS
- Unit Testing with Vitest
- Performance Optimization";

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Source text editor
    Editing,
    /// Generated roadmap checklist
    Viewing,
}

/// Holds the raw text, the parsed roadmap, and the active view.
///
/// State machine: sessions start in [`View::Editing`]; [`Session::generate`]
/// always lands in [`View::Viewing`]; [`Session::toggle_view`] flips between
/// the two. There is no terminal state.
pub struct Session {
    markdown: String,
    roadmap: Roadmap,
    view: View,
    default_category: String,
}

impl Session {
    /// Create an empty session in the editing view.
    pub fn new() -> Self {
        Self {
            markdown: String::new(),
            roadmap: Roadmap::default(),
            view: View::Editing,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Create a session preloaded with the given markdown, not yet parsed.
    pub fn with_markdown(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            ..Self::new()
        }
    }

    /// Create a session preloaded with [`SAMPLE_MARKDOWN`].
    pub fn with_sample() -> Self {
        Self::with_markdown(SAMPLE_MARKDOWN)
    }

    /// Override the placeholder name for topics that precede any header.
    /// Takes effect on the next [`Session::generate`].
    pub fn set_default_category(&mut self, name: impl Into<String>) {
        self.default_category = name.into();
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Replace the raw text. The existing roadmap and view are untouched
    /// until generation is explicitly requested.
    pub fn set_markdown(&mut self, markdown: impl Into<String>) {
        self.markdown = markdown.into();
    }

    /// Parse the current text, replace the roadmap wholesale, and switch to
    /// the viewing screen. Completion flags from the previous roadmap are
    /// lost; new topics start uncompleted with fresh ids.
    pub fn generate(&mut self) {
        self.roadmap = parsing::parse_with_default(&self.markdown, &self.default_category);
        self.view = View::Viewing;
    }

    /// Flip between editing and viewing without touching text or roadmap.
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Editing => View::Viewing,
            View::Viewing => View::Editing,
        };
    }

    /// Flip the completion flag of the topic with the given id anywhere in
    /// the roadmap. Unknown ids are a safe no-op returning false.
    pub fn toggle_topic(&mut self, id: TopicId) -> bool {
        let toggled = self.roadmap.toggle_topic(id);
        if !toggled {
            log::debug!("toggle requested for unknown topic id {id}");
        }
        toggled
    }

    /// Completion percentage over the whole roadmap, 0 when it has no topics.
    pub fn progress(&self) -> u8 {
        self.roadmap.progress()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
