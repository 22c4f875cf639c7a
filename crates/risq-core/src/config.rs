//! Configuration types for risq-mapper.
//!
//! [`Config::load`] reads `~/.config/risq/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
file          = "risq_data.json"
docs_dir      = "docs"
feedback_file = "feedback.log"

[ui]
show_section_labels   = true
detail_pane_width_pct = 55

[keybindings]
toggle_focus = "Tab"
query_focus  = "/"
tab_next     = "]"
tab_prev     = "["
help         = "?"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/risq/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[data]` section of `config.toml` — where the dataset and its
/// collaborators live. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_file")]
    pub file: PathBuf,
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
    #[serde(default = "default_feedback_file")]
    pub feedback_file: PathBuf,
}

fn default_data_file() -> PathBuf { PathBuf::from("risq_data.json") }
fn default_docs_dir() -> PathBuf { PathBuf::from("docs") }
fn default_feedback_file() -> PathBuf { PathBuf::from("feedback.log") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: default_data_file(),
            docs_dir: default_docs_dir(),
            feedback_file: default_feedback_file(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_section_labels")]
    pub show_section_labels: bool,
    #[serde(default = "default_detail_pane_width_pct")]
    pub detail_pane_width_pct: u16,
}

fn default_show_section_labels() -> bool { true }
fn default_detail_pane_width_pct() -> u16 { 55 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_section_labels: default_show_section_labels(),
            detail_pane_width_pct: default_detail_pane_width_pct(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_tab_next")]
    pub tab_next: String,
    #[serde(default = "default_tab_prev")]
    pub tab_prev: String,
    #[serde(default = "default_help")]
    pub help: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_query_focus() -> String { "/".to_string() }
fn default_tab_next() -> String { "]".to_string() }
fn default_tab_prev() -> String { "[".to_string() }
fn default_help() -> String { "?".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            query_focus: default_query_focus(),
            tab_next: default_tab_next(),
            tab_prev: default_tab_prev(),
            help: default_help(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/risq/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("risq")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.data.file, PathBuf::from("risq_data.json"));
        assert_eq!(cfg.data.docs_dir, PathBuf::from("docs"));
        assert!(cfg.ui.show_section_labels);
        assert_eq!(cfg.ui.detail_pane_width_pct, 55);
        assert_eq!(cfg.keybindings.query_focus, "/");
        assert_eq!(cfg.keybindings.tab_next, "]");
    }
}
