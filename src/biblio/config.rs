use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Configuration for biblio, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BiblioConfig {
    /// Username of the built-in librarian account
    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    /// Bcrypt hash of the librarian password. When absent, a development
    /// default password is used (see `auth`). Never a plaintext password.
    #[serde(default)]
    pub admin_password_hash: Option<String>,
}

fn default_admin_username() -> String {
    DEFAULT_ADMIN_USERNAME.to_string()
}

impl Default for BiblioConfig {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password_hash: None,
        }
    }
}

impl BiblioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BiblioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
