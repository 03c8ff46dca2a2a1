use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Path to the knowledge base JSON document.
    pub kb_path: String,
}

impl DeskConfig {
    pub fn new(kb_path: &str) -> Self {
        Self {
            kb_path: kb_path.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("CAMPUSDESK_KB_PATH") {
            config.kb_path = path;
        }
        config
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self::new(crate::DEFAULT_KB_PATH)
    }
}
