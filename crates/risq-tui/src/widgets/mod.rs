//! Ratatui widgets for the risq TUI.

pub mod command_bar;
pub mod detail;
pub mod help;
pub mod query_bar;
pub mod results;
pub mod tab_bar;
