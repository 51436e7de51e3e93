//! Configuration for content locations and reader defaults.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MEDSITE_CONTENT)
//! 2. Config file (.medsite/config.yaml)
//! 3. Defaults (./content, blog/ and news/ subdirectories)
//!
//! Config file discovery:
//! - Searches the starting directory and its parents for .medsite/config.yaml
//! - Paths in config file are relative to the project root (parent of .medsite/)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::content::Collection;

/// Process-wide configuration, resolved on first use and kept until exit
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Overrides the content root
pub const CONTENT_ENV: &str = "MEDSITE_CONTENT";

/// Author shown when a document's front matter has none
pub const DEFAULT_AUTHOR: &str = "Editorial Team";

/// Reading speed used by the read-time estimator
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub content: Option<ContentConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Content root (relative to project root)
    pub content: Option<PathBuf>,
    /// Collection subdirectory mapping
    #[serde(default)]
    pub collections: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    pub default_author: Option<String>,
    pub words_per_minute: Option<u32>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory holding one subdirectory per collection
    pub content_root: PathBuf,
    /// Collection to subdirectory mapping
    pub collections: HashMap<String, String>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Reader settings
    pub content: ContentSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSettings {
    pub default_author: String,
    pub words_per_minute: u32,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            default_author: DEFAULT_AUTHOR.to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl ResolvedConfig {
    /// Configuration rooted at `content_root` with default settings
    pub fn with_content_root(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            collections: HashMap::new(),
            config_file: None,
            content: ContentSettings::default(),
        }
    }

    /// Resolve configuration for a site whose working directory is `start`.
    ///
    /// Uses the nearest `.medsite/config.yaml` at or above `start`, then
    /// applies `MEDSITE_CONTENT` on top.
    pub fn discover(start: &Path) -> Result<Self> {
        let content_override = std::env::var_os(CONTENT_ENV).map(PathBuf::from);
        Self::discover_with(start, content_override)
    }

    fn discover_with(start: &Path, content_override: Option<PathBuf>) -> Result<Self> {
        let mut config = match find_config_file(start) {
            Some(path) => {
                let file = load_config_file(&path)?;
                Self::from_file(path, file)
            }
            None => Self::with_content_root(start.join("content")),
        };

        if let Some(root) = content_override {
            config.content_root = root;
        }
        Ok(config)
    }

    /// Merge a parsed config file over the defaults
    fn from_file(config_path: PathBuf, file: ConfigFile) -> Self {
        // Project root is the parent of .medsite/
        let project_root = config_path
            .parent()
            .and_then(Path::parent)
            .unwrap_or(Path::new("."));

        // Absolute paths replace the root on join
        let content_root = match file.paths.content.as_deref() {
            Some(path) => project_root.join(path),
            None => project_root.join("content"),
        };

        let settings = file.content.unwrap_or_default();
        let content = ContentSettings {
            default_author: settings
                .default_author
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            words_per_minute: settings
                .words_per_minute
                .filter(|wpm| *wpm > 0)
                .unwrap_or(DEFAULT_WORDS_PER_MINUTE),
        };

        Self {
            content_root,
            collections: file.paths.collections,
            config_file: Some(config_path),
            content,
        }
    }

    /// Get the storage directory for a collection
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        let key = collection.as_str();
        let subdir = self.collections.get(key).map(String::as_str).unwrap_or(key);
        self.content_root.join(subdir)
    }
}

/// Nearest `.medsite/config.yaml` at or above `start`
fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".medsite").join("config.yaml"))
        .find(|path| path.is_file())
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Get the process-wide configuration, discovered from the current directory
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| {
        std::env::current_dir()
            .context("Failed to determine current directory")
            .and_then(|cwd| ResolvedConfig::discover(&cwd))
            .map_err(|e| format!("{e:#}"))
    });

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
