use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the school information API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Pre-filled admin token for the announcement form. A development
    /// convenience, not a security mechanism; never written back to disk.
    #[serde(default)]
    pub admin_token: Option<String>,
}

pub(crate) fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            admin_token: None,
        }
    }
}
