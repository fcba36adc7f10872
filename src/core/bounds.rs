//! Rechteck, aus dem zufällige Zielpunkte gezogen werden.

use super::random::RandomSource;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Achsenparalleler Bereich `(min_x, min_y) .. (max_x, max_y)` in Bildschirm-Pixeln.
///
/// Beeinflusst nur die Wahl zufälliger Ziele, nicht die Form der Trajektorie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: IVec2,
    pub max: IVec2,
}

impl BoundingBox {
    /// Erstellt den Bereich; vertauschte Ecken werden pro Achse sortiert.
    pub fn new(corner_a: IVec2, corner_b: IVec2) -> Self {
        Self {
            min: corner_a.min(corner_b),
            max: corner_a.max(corner_b),
        }
    }

    /// Liegt `point` innerhalb (Obergrenze exklusiv, außer bei leerer Achse).
    pub fn contains(&self, point: IVec2) -> bool {
        let axis = |v: i32, lo: i32, hi: i32| v == lo || (lo..hi).contains(&v);
        axis(point.x, self.min.x, self.max.x) && axis(point.y, self.min.y, self.max.y)
    }

    /// Gleichverteilter Punkt aus `[min, max)` je Achse.
    pub fn random_point(&self, rng: &mut impl RandomSource) -> IVec2 {
        IVec2::new(
            rng.range(self.min.x, self.max.x),
            rng.range(self.min.y, self.max.y),
        )
    }
}
