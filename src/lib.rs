pub mod core;
pub mod kb;
pub mod resolver;
pub mod text;

pub use crate::core::config::DeskConfig;
pub use crate::core::error::{DeskError, Result};
pub use crate::kb::models::KnowledgeBase;
pub use crate::resolver::Resolver;

pub const DEFAULT_KB_PATH: &str = "data/knowledge_base.json";
