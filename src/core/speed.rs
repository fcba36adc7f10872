//! Bewegungsgeschwindigkeit und daraus abgeleitete Punktdichte.

use serde::Serialize;
use std::time::Duration;

/// Untere Grenze der Geschwindigkeitsskala.
pub const SPEED_MIN: f64 = 1.0;
/// Obere Grenze der Geschwindigkeitsskala.
pub const SPEED_MAX: f64 = 100.0;
/// Ab dieser Geschwindigkeit entfällt die zusätzliche Zufallsbremse pro Punkt.
pub const SLOWDOWN_THRESHOLD: f64 = 90.0;
/// Bereich der zusätzlichen Zufallsbremse pro Punkt (Sekunden).
pub const SLOWDOWN_RANGE_SECS: (f64, f64) = (0.001, 0.01);

/// Geschwindigkeit einer Bewegung auf der Skala 1..=100.
///
/// Wird einmal pro Bewegung gezogen und gilt für alle Punkte der Trajektorie.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Speed(f64);

impl Speed {
    /// Erstellt eine Geschwindigkeit, auf [1, 100] begrenzt.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(SPEED_MIN, SPEED_MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Punkte je 100 px Strecke: `round((2495 − 20·speed) / 99)`.
    ///
    /// Langsam → dichter (≈25), schnell → lichter (≈5). Rundung „half to even“.
    pub fn dots_per_100(self) -> u32 {
        ((2495.0 - 20.0 * self.0) / 99.0).round_ties_even() as u32
    }

    /// Feste Wartezeit nach jedem Einzelschritt: `(2 − 0.02·speed) / 99` Sekunden.
    ///
    /// 0.02 s bei Tempo 1, 0 bei Tempo 100.
    pub fn step_interval(self) -> Duration {
        Duration::from_secs_f64(((2.0 - 0.02 * self.0) / 99.0).max(0.0))
    }

    /// Ob pro Schritt zusätzlich zufällig gebremst wird.
    pub fn wants_slowdown(self) -> bool {
        self.0 < SLOWDOWN_THRESHOLD
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_into_scale() {
        assert_eq!(Speed::new(0.0).value(), 1.0);
        assert_eq!(Speed::new(250.0).value(), 100.0);
        assert_eq!(Speed::new(42.5).value(), 42.5);
    }

    #[test]
    fn test_dots_per_100_reference_values() {
        assert_eq!(Speed::new(1.0).dots_per_100(), 25);
        assert_eq!(Speed::new(75.0).dots_per_100(), 10);
        assert_eq!(Speed::new(90.0).dots_per_100(), 7);
        assert_eq!(Speed::new(100.0).dots_per_100(), 5);
    }

    #[test]
    fn test_dots_per_100_never_increases_with_speed() {
        let mut previous = u32::MAX;
        for step in 0..=990 {
            let dots = Speed::new(1.0 + step as f64 * 0.1).dots_per_100();
            assert!(dots <= previous, "Dichte stieg bei Schritt {}", step);
            previous = dots;
        }
    }

    #[test]
    fn test_step_interval_bounds() {
        assert!((Speed::new(1.0).step_interval().as_secs_f64() - 0.02).abs() < 1e-9);
        assert_eq!(Speed::new(100.0).step_interval(), Duration::ZERO);
    }

    #[test]
    fn test_slowdown_threshold() {
        assert!(Speed::new(89.9).wants_slowdown());
        assert!(!Speed::new(90.0).wants_slowdown());
    }

    #[test]
    fn test_serializes_as_clamped_number() {
        let value = serde_json::to_value(Speed::new(150.0)).expect("Tempo ist serialisierbar");
        assert_eq!(value, serde_json::json!(100.0));
    }
}
