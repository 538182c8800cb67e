//! Command-line and environment configuration.
//!
//! Every option can also be set through a `JOSPEL_*` environment variable; flags win.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::core::{seed, GameSession, SeedError};
use crate::headless::Strategy;
use crate::types::{LineSet, Location};

#[derive(Parser, Debug)]
#[command(name = "jospel")]
#[command(version, about = "Place sixteen cards on a 4x4 grid and score every line")]
pub struct Cli {
    /// Replay a seed token instead of shuffling a new deck
    #[arg(long, env = "JOSPEL_SEED")]
    pub seed: Option<String>,

    /// Also score the two long diagonals (env accepts 1/0, true/false, yes/no)
    #[arg(
        long,
        env = "JOSPEL_DIAGONALS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub diagonals: bool,

    /// Append log lines to this file
    #[arg(long, env = "JOSPEL_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "JOSPEL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Play one game without a terminal and print the report as JSON
    #[arg(long)]
    pub headless: bool,

    /// Placements for a headless game, e.g. A1,B2,C3
    #[arg(long, value_delimiter = ',', requires = "headless")]
    pub moves: Vec<Location>,

    /// Headless: place every card in the first empty cell
    #[arg(long, requires = "headless", conflicts_with = "moves")]
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Headless(Strategy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Validated seed token to replay
    pub seed: Option<String>,
    pub line_set: LineSet,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
    pub mode: Mode,
}

impl Config {
    /// Parse the process arguments and environment.
    pub fn load() -> Result<Self> {
        Self::from_cli(Cli::parse())
    }

    /// Parse an explicit argument list (the first item is the program name).
    pub fn try_parse_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_cli(Cli::try_parse_from(args)?)
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        let seed = cli
            .seed
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if let Some(token) = &seed {
            seed::validate(token).with_context(|| format!("invalid seed {token:?}"))?;
        }

        let line_set = if cli.diagonals {
            LineSet::WithDiagonals
        } else {
            LineSet::Standard
        };

        let mode = match (cli.headless, cli.moves.is_empty()) {
            (false, _) => Mode::Interactive,
            (true, true) => Mode::Headless(Strategy::FillFirstEmpty),
            (true, false) => Mode::Headless(Strategy::Moves(cli.moves)),
        };

        let log_path = cli.log_path.filter(|p| !p.as_os_str().is_empty());

        Ok(Self {
            seed,
            line_set,
            log_path,
            log_level: cli.log_level,
            mode,
        })
    }

    /// Start a session from the configured seed, or from a fresh shuffle.
    pub fn new_session(&self) -> Result<GameSession, SeedError> {
        match &self.seed {
            Some(token) => GameSession::from_seed(token, self.line_set),
            None => Ok(GameSession::fresh(self.line_set)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    const ENV_VARS: [&str; 4] = [
        "JOSPEL_SEED",
        "JOSPEL_DIAGONALS",
        "JOSPEL_LOG_PATH",
        "JOSPEL_LOG_LEVEL",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn defaults_to_interactive_standard_game() {
        clear_env();
        let config = Config::try_parse_from(["jospel"]).unwrap();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.line_set, LineSet::Standard);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn headless_moves_are_parsed_as_locations() {
        clear_env();
        let config =
            Config::try_parse_from(["jospel", "--headless", "--moves", "a1,B2,d4"]).unwrap();
        let Mode::Headless(Strategy::Moves(moves)) = config.mode else {
            panic!("expected headless moves, got {:?}", config.mode);
        };
        assert_eq!(
            moves.iter().map(|l| l.index()).collect::<Vec<_>>(),
            vec![0, 5, 15]
        );
    }

    #[test]
    #[serial]
    fn bad_arguments_are_rejected() {
        clear_env();
        assert!(Config::try_parse_from(["jospel", "--headless", "--moves", "E1"]).is_err());
        assert!(Config::try_parse_from(["jospel", "--moves", "A1"]).is_err());
        assert!(Config::try_parse_from(["jospel", "--headless", "--fill", "--moves", "A1"]).is_err());
        assert!(Config::try_parse_from(["jospel", "--seed", "1"]).is_err());
        assert!(Config::try_parse_from(["jospel", "--seed", "not-a-seed"]).is_err());
    }

    #[test]
    #[serial]
    fn blank_seed_means_fresh_deck() {
        clear_env();
        let config = Config::try_parse_from(["jospel", "--seed", "  ", "--diagonals"]).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.line_set, LineSet::WithDiagonals);
        assert!(config.new_session().is_ok());
    }

    #[test]
    #[serial]
    fn diagonals_env_accepts_numeric_and_word_values() {
        clear_env();
        for (value, expected) in [
            ("1", LineSet::WithDiagonals),
            ("true", LineSet::WithDiagonals),
            ("yes", LineSet::WithDiagonals),
            ("0", LineSet::Standard),
            ("false", LineSet::Standard),
        ] {
            env::set_var("JOSPEL_DIAGONALS", value);
            let config = Config::try_parse_from(["jospel"]).unwrap();
            assert_eq!(config.line_set, expected, "JOSPEL_DIAGONALS={value}");
        }
        clear_env();
    }

    #[test]
    #[serial]
    fn seed_comes_from_env() {
        clear_env();
        env::set_var("JOSPEL_SEED", "axutebils7");
        let config = Config::try_parse_from(["jospel"]).unwrap();
        assert_eq!(config.seed.as_deref(), Some("axutebils7"));
        assert!(config.new_session().is_ok());

        env::set_var("JOSPEL_SEED", "1");
        assert!(Config::try_parse_from(["jospel"]).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn log_settings_come_from_env() {
        clear_env();
        env::set_var("JOSPEL_LOG_PATH", "/tmp/jospel.log");
        env::set_var("JOSPEL_LOG_LEVEL", "debug");
        let config = Config::try_parse_from(["jospel"]).unwrap();
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/jospel.log")));
        assert_eq!(config.log_level, "debug");

        env::set_var("JOSPEL_LOG_PATH", "");
        let config = Config::try_parse_from(["jospel"]).unwrap();
        assert_eq!(config.log_path, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn flags_win_over_env() {
        clear_env();
        env::set_var("JOSPEL_SEED", "1");
        env::set_var("JOSPEL_LOG_LEVEL", "debug");
        env::set_var("JOSPEL_LOG_PATH", "/tmp/from-env.log");
        env::set_var("JOSPEL_DIAGONALS", "0");
        let config = Config::try_parse_from([
            "jospel",
            "--diagonals",
            "--seed",
            "AXUTEBILS7",
            "--log-level",
            "warn",
            "--log-path",
            "/tmp/from-flag.log",
        ])
        .unwrap();
        assert_eq!(config.seed.as_deref(), Some("AXUTEBILS7"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/from-flag.log")));
        assert_eq!(config.line_set, LineSet::WithDiagonals);
        clear_env();
    }
}
