// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme, widgets::detail::DetailContent};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Toggle display of section labels
    Labels,
    // Append text to the feedback log, or show the log when no text given
    Feedback(Option<String>),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" | "exit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "labels" => Ok(Command::Labels),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "feedback" | "fb" => {
                if rest.is_empty() {
                    Ok(Command::Feedback(None))
                } else {
                    Ok(Command::Feedback(Some(rest.to_string())))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = match name.to_ascii_lowercase().as_str() {
                "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                _ => Theme::load_default(),
            };
        }
        Command::Labels => {
            s.config.ui.show_section_labels = !s.config.ui.show_section_labels;
        }
        Command::Feedback(Some(text)) => {
            if let Err(e) = s.feedback.append(&text) {
                tracing::warn!(error = %e, "failed to append feedback");
                s.command_bar.error = Some(format!("feedback write failed: {e}"));
            }
        }
        Command::Feedback(None) => {
            // Read failure on an absent file is "none yet", anything else is
            // surfaced in the command bar.
            match s.feedback.read_all() {
                Ok(log) => {
                    let tab = &mut s.tabs[s.active_tab];
                    tab.detail.show(DetailContent::Feedback(log));
                }
                Err(e) => {
                    s.command_bar.error = Some(format!("feedback read failed: {e}"));
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit  "), Ok(Command::Quit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
        assert!(Command::parse("theme").is_err());
    }

    #[test]
    fn parse_feedback() {
        assert_eq!(Command::parse("feedback"), Ok(Command::Feedback(None)));
        assert_eq!(
            Command::parse("feedback the 4.16 snippet looks wrong"),
            Ok(Command::Feedback(Some(
                "the 4.16 snippet looks wrong".to_string()
            )))
        );
        assert_eq!(Command::parse("fb note"), Ok(Command::Feedback(Some("note".to_string()))));
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
