//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for query-assistant
#[derive(Parser, Debug)]
#[command(name = "query-assistant")]
#[command(author, version, about = "Ask Gemini a question from the terminal")]
#[command(long_about = r#"
Query Assistant sends a free-text question to the Gemini API and shows the answer.

Without a QUESTION it opens an interactive screen: type a question, press
Enter to ask, Shift+Enter (or Alt+Enter) for a new line, Esc to quit.

The API key is read from GEMINI_API_KEY, falling back to API_KEY.

Configuration files are loaded from (in priority order):
1. QUERY_ASSISTANT_* environment variables (e.g. QUERY_ASSISTANT_GEMINI__MODEL)
2. --config <path>               Explicit config file
3. ./query-assistant.toml        Project-level config
4. ~/.config/query-assistant/config.toml   Global config

Example:
  query-assistant
  query-assistant "Why is the sky blue?"
  query-assistant -m gemini-2.5-pro "Explain Rust lifetimes briefly"
"#)]
pub struct Cli {
    /// Ask once, print the answer and exit (opens the interactive screen if omitted)
    pub question: Option<String>,

    /// Model to send the question to (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner in one-shot mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter directive for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// True when no question was given on the command line
    pub fn is_interactive(&self) -> bool {
        self.question.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_question() {
        let cli = Cli::parse_from([
            "query-assistant",
            "-m",
            "gemini-2.5-pro",
            "Why is the sky blue?",
        ]);
        assert_eq!(cli.question.as_deref(), Some("Why is the sky blue?"));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_interactive_by_default() {
        let cli = Cli::parse_from(["query-assistant"]);
        assert!(cli.is_interactive());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Cli::parse_from(["query-assistant", "-v"]).log_level(), "info");
        assert_eq!(Cli::parse_from(["query-assistant", "-vv"]).log_level(), "debug");
        assert_eq!(Cli::parse_from(["query-assistant", "-vvvv"]).log_level(), "trace");
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::parse_from(["query-assistant", "--config", "a.toml", "--show-config"]);
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert!(cli.show_config);
        assert!(!cli.no_config);
    }
}
