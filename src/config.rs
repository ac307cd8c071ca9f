//! Command-line parsing and runtime configuration

use crate::error::{AppError, Result};
use crate::playback::Speed;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Expression shown when none is given
pub const DEFAULT_EXPRESSION: &str = "([{}])";

#[derive(Parser, Debug)]
#[command(
    name = "parentrace",
    version,
    about = "Step through the stack-based valid-parentheses check in the terminal."
)]
pub struct Cli {
    /// Bracket expression to trace, e.g. "([)]"
    #[arg(value_name = "EXPR", conflicts_with = "file")]
    pub expression: Option<String>,

    /// Read the expression from a file instead (trailing newline ignored)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Initial auto-play speed
    #[arg(long, value_enum, default_value_t = Speed::Normal)]
    pub speed: Speed,

    /// Start auto-play immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Print the trace and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub expression: String,
    pub speed: Speed,
    pub autoplay: bool,
    pub print_only: bool,
    pub log_file: Option<PathBuf>,
    /// Upper bound on how long the event loop waits for a key
    pub poll_interval: Duration,
    /// Minimum gap between two accepted play/pause toggles
    pub toggle_debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            expression: DEFAULT_EXPRESSION.to_string(),
            speed: Speed::default(),
            autoplay: false,
            print_only: false,
            log_file: None,
            poll_interval: Duration::from_millis(50),
            toggle_debounce: Duration::from_millis(200),
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let expression = match (cli.expression, cli.file) {
            (Some(expr), _) => expr,
            (None, Some(path)) => read_expression(path)?,
            (None, None) => DEFAULT_EXPRESSION.to_string(),
        };

        Ok(Config {
            expression,
            speed: cli.speed,
            autoplay: cli.autoplay,
            print_only: cli.print,
            log_file: cli.log_file,
            ..Config::default()
        })
    }
}

fn read_expression(path: PathBuf) -> Result<String> {
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text.trim_end_matches(['\r', '\n']).to_string()),
        Err(source) => Err(AppError::ReadInput { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("parentrace").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_cli(parse(&[])).unwrap();
        assert_eq!(config.expression, DEFAULT_EXPRESSION);
        assert_eq!(config.speed, Speed::Normal);
        assert!(!config.autoplay);
        assert!(!config.print_only);
        assert_eq!(config.poll_interval, Duration::from_millis(50));
    }

    #[test]
    fn test_expression_and_flags() {
        let config =
            Config::from_cli(parse(&["([)]", "--speed", "fast", "--autoplay", "--print"])).unwrap();
        assert_eq!(config.expression, "([)]");
        assert_eq!(config.speed, Speed::Fast);
        assert!(config.autoplay);
        assert!(config.print_only);
    }

    #[test]
    fn test_expression_conflicts_with_file() {
        let result = Cli::try_parse_from(["parentrace", "()", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_is_read_and_trimmed() {
        let path = std::env::temp_dir().join(format!("parentrace-expr-{}.txt", std::process::id()));
        fs::write(&path, "{[()]}\n").unwrap();
        let config =
            Config::from_cli(parse(&["--file", path.to_str().unwrap()])).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.expression, "{[()]}");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = Config::from_cli(parse(&["--file", "/nonexistent/parentrace/expr.txt"]))
            .unwrap_err();
        assert!(matches!(err, AppError::ReadInput { .. }));
        assert!(err.to_string().contains("/nonexistent/parentrace/expr.txt"));
    }
}
