//! Command-Line Interface
//!
//! Flags laufen über clap, Ziele und Parameter sind freie Tokens:
//! `x:y` für Ziele, `name:wert` für Parameter.

use super::backend::BackendKind;
use super::driver::Destinations;
use crate::core::Point;
use crate::shared::MoveOptions;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Beschreibung der freien Tokens (wird an die Hilfe angehängt).
pub const TOKENS_HELP: &str = "\
COORDINATES: x1:y1 x2:y2 ... xM:yM
    Move the cursor sequentially along the coordinates;
    endless random movements if no coordinates are given.

PARAMS: name:value
    count:N                   number of movements (0 = endless)
    min_pause:S, max_pause:S  pause between movements (seconds)
    min_speed:V, max_speed:V  speed of movements (1..100)
    top_left:X:Y              upper left corner of the random range
    bottom_right:X:Y          lower right corner of the random range

EXAMPLES:
    human-mouse-move 100:100 500:100 300:250 100:100 max_speed:50
    human-mouse-move count:10 max_pause:1 top_left:0:0 bottom_right:639:199";

/// Human Mouse Move - moves the pointer along human-looking curves
#[derive(Parser, Debug)]
#[command(name = "human-mouse-move")]
#[command(author, version, about, long_about = None, after_help = TOKENS_HELP)]
pub struct Cli {
    /// Coordinates (x:y) and parameters (name:value)
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Move the pointer through xdotool (default)
    #[arg(long, conflicts_with = "dry_run")]
    pub xdotool: bool,

    /// Only log the movements, no display server needed
    #[arg(long)]
    pub dry_run: bool,

    /// Write every planned curve as JSON lines to FILE
    #[arg(long, value_name = "FILE")]
    pub debug_curve: Option<PathBuf>,

    /// Options file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible movements
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Liest die Prozess-Argumente; negative Koordinaten dürfen überall stehen.
    pub fn parse_args() -> Self {
        Self::parse_from(separate_tokens(std::env::args_os()))
    }

    pub fn backend(&self) -> BackendKind {
        if self.dry_run {
            BackendKind::DryRun
        } else {
            BackendKind::Xdotool
        }
    }
}

/// Stellt bekannte Flags vor die freien Tokens und trennt beide mit `--`.
///
/// Ohne diese Trennung hält clap `-5:20` für ein unbekanntes Kurz-Flag.
/// Alles hinter einem vom Benutzer gesetzten `--` bleibt Token.
pub fn separate_tokens<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();

    let mut args = args.into_iter().map(Into::into);
    let mut flags: Vec<OsString> = args.next().into_iter().collect();
    let mut tokens = Vec::new();

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            tokens.push(arg);
            continue;
        };
        if text == "--" {
            tokens.extend(args.by_ref());
            break;
        }
        match flag_takes_value(&cmd, text) {
            Some(takes_value) => {
                flags.push(arg);
                if takes_value {
                    flags.extend(args.next());
                }
            }
            None => tokens.push(arg),
        }
    }

    flags.push(OsString::from("--"));
    flags.extend(tokens);
    flags
}

/// `Some(braucht_folgewert)` für bekannte Flags, `None` für freie Tokens.
fn flag_takes_value(cmd: &clap::Command, text: &str) -> Option<bool> {
    if let Some(long) = text.strip_prefix("--") {
        let (name, inline) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        let arg = cmd.get_arguments().find(|a| a.get_long() == Some(name))?;
        return Some(arg.get_action().takes_values() && !inline);
    }

    let mut shorts = text.strip_prefix('-')?.chars();
    let first = shorts.next()?;
    let arg = cmd.get_arguments().find(|a| a.get_short() == Some(first))?;
    Some(arg.get_action().takes_values() && shorts.as_str().is_empty())
}

/// Fehlerhafte Kommandozeilen-Tokens. Immer fatal beim Start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("`{0}`: expected x:y or name:value")]
    MissingSeparator(String),
    #[error("`{token}`: `{value}` is not a valid number")]
    InvalidNumber { token: String, value: String },
    #[error("`{0}`: expected name:x:y")]
    MissingValue(String),
    #[error("`{0}`: unexpected trailing value")]
    TrailingValue(String),
}

/// Ergebnis der Token-Auswertung.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub options: MoveOptions,
    pub destinations: Vec<Point>,
}

impl RunRequest {
    /// Feste Ziele, oder Zufallsziele wenn keine angegeben wurden.
    pub fn destinations(&self) -> Destinations {
        if self.destinations.is_empty() {
            Destinations::Random
        } else {
            Destinations::Fixed(self.destinations.clone())
        }
    }
}

/// Wertet die Tokens der Reihe nach aus; spätere Werte überschreiben frühere.
///
/// `base` liefert die Ausgangswerte (z.B. aus der Optionen-Datei).
pub fn parse_tokens<S: AsRef<str>>(
    tokens: &[S],
    base: MoveOptions,
) -> Result<RunRequest, ArgError> {
    let mut options = base;
    let mut destinations = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        let mut parts = token.split(':');
        let name = parts.next().unwrap_or_default();
        let value = parts
            .next()
            .ok_or_else(|| ArgError::MissingSeparator(token.to_string()))?;

        match name {
            "count" => options.count = number(token, value)?,
            "min_pause" => options.set_min_pause(real(token, value)?),
            "max_pause" => options.set_max_pause(real(token, value)?),
            "min_speed" => options.set_min_speed(real(token, value)?),
            "max_speed" => options.set_max_speed(real(token, value)?),
            "top_left" | "bottom_right" => {
                let y = parts
                    .next()
                    .ok_or_else(|| ArgError::MissingValue(token.to_string()))?;
                let corner = [number(token, value)?, number(token, y)?];
                if name == "top_left" {
                    options.top_left = corner;
                } else {
                    options.bottom_right = corner;
                }
            }
            _ => destinations.push(Point::new(number(token, name)?, number(token, value)?)),
        }

        if parts.next().is_some() {
            return Err(ArgError::TrailingValue(token.to_string()));
        }
    }

    Ok(RunRequest {
        options,
        destinations,
    })
}

fn number<T: std::str::FromStr>(token: &str, value: &str) -> Result<T, ArgError> {
    value.trim().parse().map_err(|_| invalid_number(token, value))
}

/// Wie `number`, aber nur endliche Gleitkommazahlen (`inf`, `nan` sind ungültig).
fn real(token: &str, value: &str) -> Result<f64, ArgError> {
    let parsed: f64 = number(token, value)?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(invalid_number(token, value))
    }
}

fn invalid_number(token: &str, value: &str) -> ArgError {
    ArgError::InvalidNumber {
        token: token.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_and_tokens() {
        let cli = Cli::try_parse_from([
            "human-mouse-move",
            "--dry-run",
            "--seed",
            "42",
            "100:100",
            "count:3",
            "--",
            "-5:20",
        ])
        .expect("gültige Kommandozeile");
        assert_eq!(cli.backend(), BackendKind::DryRun);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.tokens, vec!["100:100", "count:3", "-5:20"]);
    }

    #[test]
    fn test_negative_coordinates_anywhere() {
        let args = separate_tokens([
            "human-mouse-move",
            "100:100",
            "-5:20",
            "-v",
            "--seed",
            "7",
            "-20:-3",
            "--config=opts.toml",
            "--dry-run",
            "count:2",
        ]);
        let cli = Cli::try_parse_from(args).expect("gültige Kommandozeile");
        assert!(cli.verbose);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.config, Some(PathBuf::from("opts.toml")));
        assert_eq!(cli.backend(), BackendKind::DryRun);
        assert_eq!(cli.tokens, vec!["100:100", "-5:20", "-20:-3", "count:2"]);
    }

    #[test]
    fn test_separate_tokens_keeps_user_separator_tail() {
        let args = separate_tokens(["human-mouse-move", "-c", "a.toml", "--", "-v", "1:1"]);
        let cli = Cli::try_parse_from(args).expect("gültige Kommandozeile");
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert!(!cli.verbose);
        assert_eq!(cli.tokens, vec!["-v", "1:1"]);
    }

    #[test]
    fn test_unknown_flag_becomes_token() {
        let args = separate_tokens(["human-mouse-move", "--fast", "1:1"]);
        let cli = Cli::try_parse_from(args).expect("gültige Kommandozeile");
        assert_eq!(cli.tokens, vec!["--fast", "1:1"]);
        assert_eq!(
            parse_tokens(cli.tokens.as_slice(), MoveOptions::default()),
            Err(ArgError::MissingSeparator("--fast".to_string()))
        );
    }

    #[test]
    fn test_backend_conflict_is_rejected() {
        assert!(Cli::try_parse_from(["human-mouse-move", "--xdotool", "--dry-run"]).is_err());
    }

    #[test]
    fn test_default_backend_is_xdotool() {
        let cli = Cli::try_parse_from(["human-mouse-move"]).expect("leere Kommandozeile");
        assert_eq!(cli.backend(), BackendKind::Xdotool);
    }
}
