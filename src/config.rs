use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::directives::{DEFAULT_LITERAL_PREFIXES, DEFAULT_TAG, DirectiveSet};

pub const CONFIG_FILE_NAME: &str = ".mcptagrc.json";

// Tag names as written after `@`, e.g. `mcp`, `ignore-comment`, `buf.validate`
static TAG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.:-]*$").unwrap());

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default = "default_literal_prefixes")]
    pub literal_prefixes: Vec<String>,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_literal_prefixes() -> Vec<String> {
    DEFAULT_LITERAL_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            literal_prefixes: default_literal_prefixes(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `tag` is not a bare tag name or if any entry in
    /// `literalPrefixes` is blank or spans several lines.
    pub fn validate(&self) -> Result<()> {
        validate_tag(&self.tag)?;

        for prefix in &self.literal_prefixes {
            if prefix.trim().is_empty() {
                anyhow::bail!("Empty entry in 'literalPrefixes'");
            }
            if prefix.contains('\n') {
                anyhow::bail!(
                    "Invalid entry in 'literalPrefixes': {:?} spans multiple lines",
                    prefix
                );
            }
        }

        Ok(())
    }

    pub fn directive_set(&self) -> DirectiveSet {
        DirectiveSet::new(&self.literal_prefixes)
    }
}

/// Check that `tag` is usable as the marker tag (without the leading `@`).
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.starts_with('@') {
        anyhow::bail!(
            "Invalid tag \"{}\": write the tag name without the leading '@'",
            tag
        );
    }
    if !TAG_NAME_REGEX.is_match(tag) {
        anyhow::bail!("Invalid tag \"{}\"", tag);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
