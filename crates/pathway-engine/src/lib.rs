pub mod models;
pub mod parsing;
pub mod session;

// Re-export key types for easier usage
pub use models::{Category, DEFAULT_CATEGORY, Roadmap, Topic, TopicId};
pub use parsing::{parse, parse_with_default};
pub use session::{SAMPLE_MARKDOWN, Session, View};
