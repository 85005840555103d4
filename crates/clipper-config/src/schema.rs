//! Configuration schema definitions.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Notion API version sent with every request.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notion: NotionConfig,

    #[serde(default)]
    pub capture: CaptureConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Default config file location (`~/.clipper/config.toml`).
    pub fn default_path() -> PathBuf {
        clipper_dir().join("config.toml")
    }
}

/// Clipper's home directory (`~/.clipper`).
pub fn clipper_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".clipper")
}

/// Notion credentials and endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token.
    #[serde(default)]
    pub token: String,

    /// Target database ID.
    #[serde(default)]
    pub database_id: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl NotionConfig {
    /// Both the token and the database ID are set.
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty() && !self.database_id.trim().is_empty()
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            database_id: String::new(),
            api_base_url: default_api_base_url(),
            api_version: default_api_version(),
        }
    }
}

// The token never reaches logs.
impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("NotionConfig")
            .field("token", &token)
            .field("database_id", &self.database_id)
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

fn default_api_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_api_version() -> String {
    DEFAULT_NOTION_VERSION.to_string()
}

/// How captures are turned into pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Labels applied to every saved page.
    #[serde(default)]
    pub default_tags: Vec<String>,

    /// Prepend the question as a callout block.
    #[serde(default = "default_true")]
    pub include_question: bool,

    /// Send the `SavedAt` date property.
    #[serde(default = "default_true")]
    pub include_timestamp: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            default_tags: Vec::new(),
            include_question: default_true(),
            include_timestamp: default_true(),
        }
    }
}

/// Local history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// JSON Lines file the log is appended to.
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_history_path(),
        }
    }
}

fn default_history_path() -> PathBuf {
    clipper_dir().join("history.jsonl")
}

/// Companion server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_true() -> bool {
    true
}
