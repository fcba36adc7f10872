//! Human Mouse Move Library.
//! Menschenähnliche Zeigerbewegungen: Trajektorien-Planung über zweistufige
//! Bézier-Kurven und Abspielen über austauschbare Backends.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    parse_tokens, ArgError, BackendKind, Cli, Destinations, DryRunBackend, MouseBackend,
    MoveOutcome, PauseRange, PlaybackConfig, PlaybackDriver, RunRequest, RunSummary, Sleeper,
    ThreadSleeper, XdotoolBackend,
};
pub use core::{
    plan, plan_sketch, BoundingBox, CurveSketch, MidpointRandom, Point, RandomSource,
    SeededRandom, Speed, Trajectory,
};
pub use shared::{CurveDump, MoveOptions};
