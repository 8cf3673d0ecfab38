//! Application configuration
//!
//! A single TOML file declares the demo credential pair, the profile
//! owner, and where the catalog snapshot lives:
//!
//! ```toml
//! [auth]
//! email = "jane.smith@university.edu"
//! password = "correct-horse"
//!
//! [auth.profile]
//! id = "1"
//! name = "Dr. Jane Smith"
//! email = "jane.smith@university.edu"
//! affiliation = "University of Science & Technology"
//! position = "Associate Professor"
//! department = "Computer Science"
//!
//! catalog_path = "/home/jane/.local/share/vita/catalog.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vita_domain::User;

/// Errors from config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The credential pair and the profile it unlocks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    pub profile: User,
}

/// Top-level application config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub auth: AuthConfig,
    /// Where the catalog snapshot is stored; `None` means in-memory only.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&data)?)
    }

    /// Conventional per-user config location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vita").join("config.toml"))
    }
}
