//! Application-Layer: Backends, Abspiel-Treiber und Kommandozeile.

pub mod backend;
pub mod cli;
pub mod driver;

pub use backend::{BackendKind, DryRunBackend, MouseBackend, XdotoolBackend};
pub use cli::{parse_tokens, ArgError, Cli, RunRequest};
pub use driver::{
    Destinations, MoveOutcome, PauseRange, PlaybackConfig, PlaybackDriver, RunSummary, Sleeper,
    ThreadSleeper,
};
