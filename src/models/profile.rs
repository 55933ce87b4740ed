use serde::{Deserialize, Serialize};

/// Business profile printed in the default document header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl ProfileInfo {
    /// Single-letter avatar placeholder shown when no profile image is set.
    /// Empty name gives an empty placeholder.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}
