//! risq TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use std::path::PathBuf;

/// Start the TUI: load config, dataset, and theme, then hand the terminal
/// to [`App::run`].
///
/// `data_override` replaces the configured dataset path (the `--data` CLI
/// flag). A missing or malformed dataset is fatal here — no query path can
/// function without it.
pub fn run(data_override: Option<PathBuf>) -> anyhow::Result<()> {
    let config = risq_core::config::Config::load()
        .unwrap_or_else(|_| risq_core::config::Config::defaults());

    let data_path = data_override.unwrap_or_else(|| config.data.file.clone());
    let dataset = risq_core::Dataset::from_path(&data_path)?;

    let theme = theme::Theme::load_default();
    App::new(dataset, config, theme).run()
}
