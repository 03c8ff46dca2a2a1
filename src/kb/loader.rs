use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::error::Result;
use super::models::KnowledgeBase;

impl KnowledgeBase {
    /// Read and parse the knowledge base document. Called once at startup;
    /// the returned value is immutable for the process lifetime.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let kb: KnowledgeBase = serde_json::from_str(&raw)?;
        info!(
            "Loaded knowledge base: {} departments, {} subjects, {} calendar events, {} qna entries",
            kb.departments.len(),
            kb.subjects().len(),
            kb.calendar_events().len(),
            kb.semester_qna.len()
        );
        Ok(kb)
    }
}
