//! Trajektorien-Planung: zweistufige Bézier-Konstruktion mit Zufallskrümmung.
//!
//! 1. **Grobdurchgang** — quadratische Kurve `[Ziel, Scheitel, Start]`, Scheitel
//!    um `dist · U(0.1, 0.3)` in y verschoben. Erste/letzte Abtastung fallen weg.
//! 2. **Verfeinerung** — jeder innere Grobpunkt wird in y verrauscht; aus
//!    `[Ziel, verrauschte Punkte rückwärts, Start]` entsteht die dichte Endkurve.
//!
//! Die umgekehrte Kontrollpunkt-Reihenfolge ist Absicht: zusammen mit der
//! Bernstein-Orientierung in [`bezier`](super::bezier) läuft die Abtastung
//! dadurch vom Start zum Ziel.

use super::bezier;
use super::random::RandomSource;
use super::speed::Speed;
use glam::{DVec2, IVec2};
use serde::Serialize;

/// Bereich des Scheitel-Versatzes relativ zur Distanz.
pub const DEVIATION_RANGE: (f64, f64) = (0.1, 0.3);
/// Bereich des Rausch-Faktors pro innerem Punkt.
pub const JITTER_RANGE: (f64, f64) = (0.5, 5.0);
/// Grenzen für das x/y-Verhältnis, das die Rauschstärke skaliert.
pub const AXIS_COEF_RANGE: (f64, f64) = (0.1, 1.0);
/// Grobdurchgang: Punkte je `dots_per_100 · dist / 500`.
const COARSE_DIVISOR: f64 = 500.0;
/// Endkurve: Punkte je `dots_per_100 · dist / 100`.
const FINE_DIVISOR: f64 = 100.0;
/// Mindestanzahl Grob-Abtastungen (weniger liefert kaum innere Punkte).
pub const COARSE_MIN_SAMPLES: usize = 4;
/// Mindestanzahl End-Abtastungen, damit Start und Ziel enthalten sind.
pub const FINE_MIN_SAMPLES: usize = 2;

/// Fertige, unveränderliche Punktfolge einer Bewegung.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trajectory {
    points: Vec<IVec2>,
}

impl Trajectory {
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<IVec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<IVec2> {
        self.points.last().copied()
    }
}

impl IntoIterator for Trajectory {
    type Item = IVec2;
    type IntoIter = std::vec::IntoIter<IVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Alle Zwischenstände einer Planung (für Debug-Ausgaben).
#[derive(Debug, Clone, Serialize)]
pub struct CurveSketch {
    pub start: IVec2,
    pub destination: IVec2,
    pub speed: Speed,
    pub dots_per_100: u32,
    /// `[Ziel, Scheitel, Start]`
    pub coarse_controls: Vec<DVec2>,
    pub coarse_sample_count: usize,
    /// `[Ziel, verrauschte Punkte rückwärts, Start]` — Auswertungsreihenfolge
    pub refined_controls: Vec<DVec2>,
    pub trajectory: Trajectory,
}

impl CurveSketch {
    /// Verrauschte Stützpunkte in Laufrichtung (Start → Ziel).
    pub fn waypoints_forward(&self) -> Vec<DVec2> {
        self.refined_controls.iter().rev().copied().collect()
    }
}

/// Plant die Trajektorie von `start` nach `destination`.
pub fn plan(
    start: IVec2,
    destination: IVec2,
    speed: Speed,
    rng: &mut impl RandomSource,
) -> Trajectory {
    plan_sketch(start, destination, speed, rng).trajectory
}

/// Wie [`plan`], liefert zusätzlich beide Kontrollpunkt-Folgen.
///
/// Zufallsziehungen in fester Reihenfolge: Scheitel-Faktor, Scheitel-Vorzeichen,
/// dann je innerem Punkt Rausch-Faktor und Vorzeichen.
pub fn plan_sketch(
    start: IVec2,
    destination: IVec2,
    speed: Speed,
    rng: &mut impl RandomSource,
) -> CurveSketch {
    let from = start.as_dvec2();
    let to = destination.as_dvec2();
    let delta = to - from;
    let dist = delta.length();
    let dots_per_100 = speed.dots_per_100();

    // ── Grobdurchgang ──
    let deviation = dist * rng.uniform(DEVIATION_RANGE.0, DEVIATION_RANGE.1) * rng.sign();
    let apex = (from + to) * 0.5 + DVec2::new(0.0, deviation);
    let coarse_controls = vec![to, apex, from];

    let coarse_sample_count = coarse_sample_count(dots_per_100, dist);
    let coarse = bezier::evaluate(&coarse_controls, coarse_sample_count);
    let interior = &coarse[1..coarse.len() - 1];

    // ── Verfeinerung ──
    let step_y = delta.y / coarse_sample_count as f64;
    let coef = axis_coef(delta);

    let mut refined_controls = Vec::with_capacity(interior.len() + 2);
    refined_controls.push(to);
    for p in interior {
        let jitter = step_y * coef * rng.uniform(JITTER_RANGE.0, JITTER_RANGE.1) * rng.sign();
        let waypoint = DVec2::new(p.x.trunc(), (p.y + jitter).trunc());
        // Direkt hinter dem Ziel einfügen → innere Punkte landen rückwärts
        refined_controls.insert(1, waypoint);
    }
    refined_controls.push(from);

    let fine_sample_count = fine_sample_count(dots_per_100, dist);
    let points = bezier::evaluate(&refined_controls, fine_sample_count)
        .into_iter()
        .map(|p| p.round().as_ivec2())
        .collect();

    log::debug!(
        "Plan {} → {}: dist={:.1}, speed={}, dots_per_100={}, grob={}, fein={}",
        start,
        destination,
        dist,
        speed,
        dots_per_100,
        coarse_sample_count,
        fine_sample_count
    );

    CurveSketch {
        start,
        destination,
        speed,
        dots_per_100,
        coarse_controls,
        coarse_sample_count,
        refined_controls,
        trajectory: Trajectory { points },
    }
}

/// `trunc(dots_per_100 · dist / 500)`, mindestens [`COARSE_MIN_SAMPLES`].
pub fn coarse_sample_count(dots_per_100: u32, dist: f64) -> usize {
    let count = (dots_per_100 as f64 * dist / COARSE_DIVISOR) as usize;
    if count < COARSE_MIN_SAMPLES {
        COARSE_MIN_SAMPLES
    } else {
        count
    }
}

/// `trunc(dots_per_100 · dist / 100)`, mindestens [`FINE_MIN_SAMPLES`].
pub fn fine_sample_count(dots_per_100: u32, dist: f64) -> usize {
    ((dots_per_100 as f64 * dist / FINE_DIVISOR) as usize).max(FINE_MIN_SAMPLES)
}

/// `|Δx / Δy|` auf [0.1, 1] begrenzt; `1` bei rein horizontaler Bewegung.
pub fn axis_coef(delta: DVec2) -> f64 {
    if delta.y == 0.0 {
        1.0
    } else {
        (delta.x / delta.y)
            .abs()
            .clamp(AXIS_COEF_RANGE.0, AXIS_COEF_RANGE.1)
    }
}
