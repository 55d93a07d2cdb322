use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tsglotrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories (or globs) to scan for catalogs. Empty scans the root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Contexts excluded from every check.
    #[serde(default)]
    pub ignore_contexts: Vec<String>,
    /// Source texts excluded from every check.
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    /// Verify that `<location>` references point at existing files and lines.
    #[serde(default = "default_check_locations")]
    pub check_locations: bool,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/target/**"]
        .map(String::from)
        .to_vec()
}

fn default_check_locations() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_contexts: Vec::new(),
            ignore_texts: Vec::new(),
            check_locations: default_check_locations(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
