pub mod roadmap;
pub mod topic;

pub use roadmap::{Category, DEFAULT_CATEGORY, Roadmap};
pub use topic::{Topic, TopicId};
