//! Core: Kurvenauswertung, Trajektorien-Planung und Domänentypen.

pub mod bezier;
pub mod bounds;
pub mod random;
pub mod speed;
/// Zweistufige Trajektorien-Konstruktion
///
/// Grobe quadratische Kurve + verrauschte Verfeinerung, dichte abhängig vom Tempo.
pub mod trajectory;

pub use bounds::BoundingBox;
pub use random::{MidpointRandom, RandomSource, SeededRandom};
pub use speed::Speed;
pub use trajectory::{plan, plan_sketch, CurveSketch, Trajectory};

/// Bildschirmpunkt in Pixeln.
pub type Point = glam::IVec2;
