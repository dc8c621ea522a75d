use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePrompt(pub String);

impl Default for DeletePrompt {
    fn default() -> Self {
        Self("Are you sure you want to delete this teacher?".to_owned())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmptyMessage(pub String);

impl Default for EmptyMessage {
    fn default() -> Self {
        Self("No teachers found.".to_owned())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Confirm every delete without asking.
    #[serde(default)]
    pub assume_yes: bool,

    #[serde(default)]
    pub delete_prompt: DeletePrompt,

    /// Shown instead of the list when no teacher matches the search.
    #[serde(default)]
    pub empty_message: EmptyMessage,
}

impl AppConfig {
    pub fn try_read(file_path: &Path) -> anyhow::Result<AppConfig> {
        let json = &std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading config file {file_path:?}"))?;
        serde_json::from_str::<AppConfig>(json)
            .with_context(|| format!("Parsing JSON config file {file_path:?}"))
    }
}
