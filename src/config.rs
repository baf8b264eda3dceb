//! Synchronization configuration
//!
//! Defaults match the conventional media-store layout: files live under the
//! `media` root segment, and each primary file carries `_thumb` and
//! `_big-thumb` artifact variants.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Path synchronization settings
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Fixed first segment of every canonical path
    #[serde(default = "default_root_segment")]
    pub root_segment: String,

    /// Artifact variant tags, relocated in this order after the primary file
    #[serde(default = "default_variant_tags")]
    pub variant_tags: Vec<String>,
}

fn default_root_segment() -> String {
    "media".to_string()
}

fn default_variant_tags() -> Vec<String> {
    vec!["_thumb".to_string(), "_big-thumb".to_string()]
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            root_segment: default_root_segment(),
            variant_tags: default_variant_tags(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment overlay.
    /// Precedence: defaults -> file -> MEDIAPATH_* environment (highest).
    pub fn load_from_file(path: &Path) -> Result<SyncConfig, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix("MEDIAPATH")
                    .separator("__")
                    .try_parsing(true),
            );
        builder.build()?.try_deserialize()
    }

    /// Create default configuration.
    pub fn default() -> SyncConfig {
        SyncConfig::default()
    }
}
