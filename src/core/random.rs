//! Injizierbare Zufallsquelle für Planer und Abspiel-Treiber.
//!
//! Alle Zufallsziehungen laufen über [`RandomSource`], damit Tests
//! deterministische Folgen einspeisen können.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Quelle gleichverteilter Zufallswerte.
pub trait RandomSource {
    /// Gleichverteilter Wert aus `[low, high]`. Bei `low >= high` wird `low` geliefert.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Münzwurf.
    fn coin(&mut self) -> bool;

    /// Ganzzahl aus `[low, high)`. Bei leerem Bereich wird `low` geliefert.
    fn range(&mut self, low: i32, high: i32) -> i32;

    /// Zufälliges Vorzeichen: `-1.0` oder `+1.0`.
    fn sign(&mut self) -> f64 {
        if self.coin() {
            1.0
        } else {
            -1.0
        }
    }
}

/// Produktiv-Zufallsquelle auf Basis von ChaCha8.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Reproduzierbare Folge aus festem Seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed aus dem Betriebssystem.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn range(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Deterministische Quelle: liefert stets die Bereichsmitte bzw. die Untergrenze.
///
/// Für Golden-Output-Tests und reproduzierbare Kurvenformen.
#[derive(Debug, Clone, Copy)]
pub struct MidpointRandom {
    /// Ergebnis jedes Münzwurfs (`true` → Vorzeichen `+1`).
    pub heads: bool,
}

impl Default for MidpointRandom {
    fn default() -> Self {
        Self { heads: true }
    }
}

impl RandomSource for MidpointRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) * 0.5
    }

    fn coin(&mut self) -> bool {
        self.heads
    }

    fn range(&mut self, low: i32, _high: i32) -> i32 {
        low
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn coin(&mut self) -> bool {
        (**self).coin()
    }

    fn range(&mut self, low: i32, high: i32) -> i32 {
        (**self).range(low, high)
    }
}
