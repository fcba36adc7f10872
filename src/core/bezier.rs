//! Bézier-Auswertung beliebigen Grades über Bernstein-Polynome.
//!
//! Gewichtung: `C(n, i) · t^(n−i) · (1−t)^i · P[i]`. Damit liefert `t = 0`
//! den **letzten** und `t = 1` den **ersten** Kontrollpunkt — die Abtastung
//! läuft also vom Listenende zum Listenanfang.

use glam::DVec2;

/// Binomialkoeffizient `C(n, k)` als f64 (multiplikativ, ohne Überlauf bei kleinen n).
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, j| acc * (n - j) as f64 / (j + 1) as f64)
}

/// Bernstein-Gewicht für Kontrollpunkt `i` einer Kurve vom Grad `n` bei `t`.
pub fn bernstein(i: usize, n: usize, t: f64) -> f64 {
    binomial(n, i) * t.powi((n - i) as i32) * (1.0 - t).powi(i as i32)
}

/// Punkt auf der Kurve bei Parameter `t`.
pub fn point_at(control_points: &[DVec2], t: f64) -> DVec2 {
    let Some(n) = control_points.len().checked_sub(1) else {
        return DVec2::ZERO;
    };
    control_points
        .iter()
        .enumerate()
        .fold(DVec2::ZERO, |acc, (i, &p)| acc + p * bernstein(i, n, t))
}

/// Tastet die Kurve an `sample_count` gleichmäßig verteilten `t ∈ [0, 1]` ab.
///
/// Entspricht `linspace(0, 1, sample_count)`: bei `sample_count == 1` nur `t = 0`,
/// bei `0` eine leere Liste. Aufrufer sorgen für eine Untergrenze ≥ 2,
/// damit beide Enden enthalten sind.
pub fn evaluate(control_points: &[DVec2], sample_count: usize) -> Vec<DVec2> {
    match sample_count {
        0 => Vec::new(),
        1 => vec![point_at(control_points, 0.0)],
        _ => {
            let last = (sample_count - 1) as f64;
            (0..sample_count)
                .map(|s| point_at(control_points, s as f64 / last))
                .collect()
        }
    }
}
