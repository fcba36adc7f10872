//! Zentrale Konfiguration für Bewegungen.
//!
//! `MoveOptions` enthält alle Werte, die per TOML-Datei und Kommandozeile
//! gesetzt werden können. Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::app::{PauseRange, PlaybackConfig};
use crate::core::speed::{SPEED_MAX, SPEED_MIN};
use crate::core::{BoundingBox, Point};
use serde::{Deserialize, Serialize};

// ── Tempo ───────────────────────────────────────────────────────────

/// Untere Grenze des Tempo-Bereichs (1..=100).
pub const DEFAULT_MIN_SPEED: f64 = 60.0;
/// Obere Grenze des Tempo-Bereichs (1..=100).
pub const DEFAULT_MAX_SPEED: f64 = 90.0;

// ── Pausen ──────────────────────────────────────────────────────────

/// Minimale Pause zwischen zwei Bewegungen (Sekunden).
pub const DEFAULT_MIN_PAUSE: f64 = 0.5;
/// Maximale Pause zwischen zwei Bewegungen (Sekunden).
pub const DEFAULT_MAX_PAUSE: f64 = 4.0;

// ── Zielbereich ─────────────────────────────────────────────────────

/// Rechte untere Ecke, wenn nichts konfiguriert ist (640×480-Raster).
pub const DEFAULT_MAX_X: i32 = 639;
pub const DEFAULT_MAX_Y: i32 = 479;

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "human_mouse_move.toml";

/// Alle einstellbaren Bewegungs-Optionen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoveOptions {
    /// Anzahl Bewegungen, 0 = unbegrenzt
    pub count: usize,
    /// Pausenbereich zwischen Bewegungen (Sekunden)
    pub min_pause: f64,
    pub max_pause: f64,
    /// Tempobereich (1..=100)
    pub min_speed: f64,
    pub max_speed: f64,
    /// Zielbereich für zufällige Bewegungen
    pub top_left: [i32; 2],
    pub bottom_right: [i32; 2],
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            count: 0,
            min_pause: DEFAULT_MIN_PAUSE,
            max_pause: DEFAULT_MAX_PAUSE,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            top_left: [0, 0],
            bottom_right: [DEFAULT_MAX_X, DEFAULT_MAX_Y],
        }
    }
}

impl MoveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.normalized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("human-mouse-move"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Erzwingt gültige Bereiche: Tempo in [1, 100], Pausen ≥ 0, jeweils min ≤ max.
    ///
    /// Nicht-endliche Werte (`inf`, `nan` sind in TOML erlaubt) fallen auf die Defaults zurück.
    pub fn normalized(mut self) -> Self {
        self.min_speed = finite_or(self.min_speed, DEFAULT_MIN_SPEED);
        self.max_speed = finite_or(self.max_speed, DEFAULT_MAX_SPEED);
        let min_pause = finite_or(self.min_pause, DEFAULT_MIN_PAUSE);
        let max_pause = finite_or(self.max_pause, DEFAULT_MAX_PAUSE);
        self.set_min_speed(self.min_speed);
        self.set_max_speed(self.max_speed);
        self.min_pause = min_pause.max(0.0);
        self.max_pause = max_pause.max(self.min_pause);
        self
    }

    /// Setzt das Mindesttempo; ein kleineres Höchsttempo wird mitgezogen.
    pub fn set_min_speed(&mut self, value: f64) {
        self.min_speed = value.clamp(SPEED_MIN, SPEED_MAX);
        if self.max_speed < self.min_speed {
            self.max_speed = self.min_speed;
        }
    }

    /// Setzt das Höchsttempo; ein größeres Mindesttempo wird mitgezogen.
    pub fn set_max_speed(&mut self, value: f64) {
        self.max_speed = value.clamp(SPEED_MIN, SPEED_MAX);
        if self.min_speed > self.max_speed {
            self.min_speed = self.max_speed;
        }
    }

    /// Setzt die Mindestpause; eine kürzere Höchstpause wird mitgezogen.
    pub fn set_min_pause(&mut self, secs: f64) {
        self.min_pause = secs;
        if self.max_pause < self.min_pause {
            self.max_pause = self.min_pause;
        }
    }

    /// Setzt die Höchstpause; eine längere Mindestpause wird mitgezogen.
    pub fn set_max_pause(&mut self, secs: f64) {
        self.max_pause = secs;
        if self.min_pause > self.max_pause {
            self.min_pause = self.max_pause;
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(Point::from(self.top_left), Point::from(self.bottom_right))
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            bounds: self.bounds(),
        }
    }

    pub fn pause_range(&self) -> PauseRange {
        PauseRange {
            min_secs: self.min_pause,
            max_secs: self.max_pause,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Ungültiger Optionswert {}, verwende {}", value, fallback);
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts: MoveOptions = toml::from_str("max_speed = 50\ncount = 3\n")
            .expect("Teil-TOML muss parsen");
        assert_eq!(opts.count, 3);
        assert_eq!(opts.max_speed, 50.0);
        assert_eq!(opts.min_speed, DEFAULT_MIN_SPEED);
        assert_eq!(opts.bottom_right, [DEFAULT_MAX_X, DEFAULT_MAX_Y]);
    }

    #[test]
    fn test_normalized_repairs_ranges() {
        let opts = MoveOptions {
            min_speed: 0.0,
            max_speed: 400.0,
            min_pause: 3.0,
            max_pause: 1.0,
            ..MoveOptions::default()
        }
        .normalized();
        assert_eq!(opts.min_speed, 1.0);
        assert_eq!(opts.max_speed, 100.0);
        assert_eq!(opts.min_pause, 3.0);
        assert_eq!(opts.max_pause, 3.0);
    }

    #[test]
    fn test_non_finite_toml_values_fall_back_to_defaults() {
        let opts: MoveOptions =
            toml::from_str("min_speed = nan\nmax_speed = inf\nmin_pause = -inf\nmax_pause = inf\n")
                .expect("TOML erlaubt inf/nan");
        let opts = opts.normalized();
        assert_eq!(opts.min_speed, DEFAULT_MIN_SPEED);
        assert_eq!(opts.max_speed, DEFAULT_MAX_SPEED);
        assert_eq!(opts.min_pause, DEFAULT_MIN_PAUSE);
        assert_eq!(opts.max_pause, DEFAULT_MAX_PAUSE);
    }

    #[test]
    fn test_speed_setters_drag_counterpart() {
        let mut opts = MoveOptions::default();
        opts.set_max_speed(50.0);
        assert_eq!(opts.min_speed, 50.0);
        opts.set_min_speed(120.0);
        assert_eq!(opts.min_speed, 100.0);
        assert_eq!(opts.max_speed, 100.0);
    }

    #[test]
    fn test_pause_setters_drag_counterpart() {
        let mut opts = MoveOptions::default();
        opts.set_min_pause(6.0);
        assert_eq!(opts.max_pause, 6.0);
        opts.set_max_pause(0.2);
        assert_eq!(opts.min_pause, 0.2);
    }

    #[test]
    fn test_toml_roundtrip_via_file() {
        let path = std::env::temp_dir().join(format!(
            "human_mouse_move_opts_{}.toml",
            std::process::id()
        ));
        let opts = MoveOptions {
            count: 7,
            top_left: [10, 20],
            ..MoveOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern muss klappen");
        let loaded = MoveOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_missing_or_broken_file_falls_back() {
        let missing = std::env::temp_dir().join("human_mouse_move_does_not_exist.toml");
        assert_eq!(MoveOptions::load_from_file(&missing), MoveOptions::default());

        let broken = std::env::temp_dir().join(format!(
            "human_mouse_move_broken_{}.toml",
            std::process::id()
        ));
        std::fs::write(&broken, "min_speed = \"schnell\"").expect("Schreiben muss klappen");
        let loaded = MoveOptions::load_from_file(&broken);
        let _ = std::fs::remove_file(&broken);
        assert_eq!(loaded, MoveOptions::default());
    }
}
