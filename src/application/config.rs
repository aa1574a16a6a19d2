//! Command line options and startup configuration.

use clap::Parser;
use std::path::PathBuf;

/// bookshelf: a personal library catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Keep track of your books from the terminal")]
pub struct Cli {
    /// JSON file holding the catalog
    #[arg(long, env = "BOOKSHELF_DATA_FILE", default_value = "books.json")]
    pub data_file: PathBuf,

    /// Use the line-oriented interface even on a capable terminal
    #[arg(long)]
    pub plain: bool,

    /// Write diagnostic logs to this file (filtered by RUST_LOG)
    #[arg(long, env = "BOOKSHELF_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Which front end drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    FullScreen,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_file: Option<PathBuf>,
    pub render_mode: RenderMode,
}

impl AppConfig {
    /// Resolves the options against what the terminal supports.
    ///
    /// Full-screen mode needs an interactive terminal on both ends and can
    /// always be turned off with `--plain`.
    pub fn resolve(cli: Cli, interactive_terminal: bool) -> Self {
        let render_mode = if cli.plain || !interactive_terminal {
            RenderMode::Plain
        } else {
            RenderMode::FullScreen
        };

        Self {
            data_file: cli.data_file,
            log_file: cli.log_file,
            render_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert!(!cli.plain);

        let config = AppConfig::resolve(cli, true);
        assert_eq!(config.render_mode, RenderMode::FullScreen);
    }

    #[test]
    fn test_explicit_options() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "--data-file",
            "/tmp/library.json",
            "--log-file",
            "/tmp/bookshelf.log",
            "--plain",
        ])
        .unwrap();

        let config = AppConfig::resolve(cli, true);
        assert_eq!(config.data_file, PathBuf::from("/tmp/library.json"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/bookshelf.log")));
        assert_eq!(config.render_mode, RenderMode::Plain);
    }

    #[test]
    fn test_non_terminal_falls_back_to_plain() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        let config = AppConfig::resolve(cli, false);
        assert_eq!(config.render_mode, RenderMode::Plain);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["bookshelf", "--color"]).is_err());
    }
}
