//! Abspiel-Treiber: plant pro Ziel eine Trajektorie und spielt sie Punkt für Punkt ab.
//!
//! Einziger Ablauf, keine Nebenläufigkeit: blockiert auf jedem Backend-Aufruf
//! und jeder Pause. Zufall und Schlafen sind injiziert, damit Tests ohne
//! Wartezeit und mit festen Ziehungen laufen.

use super::backend::MouseBackend;
use crate::core::{trajectory, BoundingBox, Point, RandomSource, Speed};
use crate::shared::CurveDump;
use anyhow::Result;
use std::time::Duration;

/// Blockierendes Warten.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Schläft wirklich (`std::thread::sleep`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Ergebnis eines einzelnen `move_to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Trajektorie vollständig abgespielt.
    Completed { points: usize, speed: Speed },
    /// Startposition unbestimmbar — keine Trajektorie, kein Fehler.
    Skipped,
}

/// Woher die Ziele kommen.
#[derive(Debug, Clone, PartialEq)]
pub enum Destinations {
    /// Feste Liste, der Reihe nach.
    Fixed(Vec<Point>),
    /// Endlos gleichverteilt aus dem konfigurierten Bereich.
    Random,
}

/// Pausenbereich zwischen zwei Bewegungen (Sekunden).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PauseRange {
    pub min_secs: f64,
    pub max_secs: f64,
}

/// Fest eingestellte Parameter des Treibers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    pub min_speed: f64,
    pub max_speed: f64,
    pub bounds: BoundingBox,
}

/// Zusammenfassung eines `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Bearbeitete Ziele (inkl. übersprungener).
    pub moves: usize,
    pub skipped: usize,
    /// Abgespielte Einzelschritte insgesamt.
    pub points: usize,
}

pub struct PlaybackDriver<B, R, S> {
    backend: B,
    rng: R,
    sleeper: S,
    config: PlaybackConfig,
    curve_dump: Option<CurveDump>,
}

impl<B: MouseBackend, R: RandomSource, S: Sleeper> PlaybackDriver<B, R, S> {
    pub fn new(backend: B, rng: R, sleeper: S, config: PlaybackConfig) -> Self {
        Self {
            backend,
            rng,
            sleeper,
            config,
            curve_dump: None,
        }
    }

    /// Schreibt jede geplante Kurve zusätzlich in `dump`.
    pub fn with_curve_dump(mut self, dump: CurveDump) -> Self {
        self.curve_dump = Some(dump);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Bewegt den Zeiger menschenähnlich nach `destination`.
    ///
    /// Das Tempo wird einmal gezogen und gilt für die ganze Trajektorie.
    pub fn move_to(&mut self, destination: Point) -> Result<MoveOutcome> {
        let speed = Speed::new(
            self.rng
                .uniform(self.config.min_speed, self.config.max_speed),
        );

        let Some(start) = self.backend.position()? else {
            log::warn!(
                "Zeigerposition unbestimmbar, Bewegung nach {} übersprungen",
                destination
            );
            return Ok(MoveOutcome::Skipped);
        };

        let sketch = trajectory::plan_sketch(start, destination, speed, &mut self.rng);
        if let Some(dump) = self.curve_dump.as_mut() {
            dump.record(&sketch)?;
        }

        let trajectory = sketch.trajectory;
        let points = trajectory.len();
        for point in trajectory {
            self.backend.move_to(point, speed)?;
            self.pace(speed);
        }

        Ok(MoveOutcome::Completed { points, speed })
    }

    /// Fährt alle Ziele ab, mit zufälliger Pause nach jeder Bewegung.
    ///
    /// `move_limit > 0` beendet den Lauf nach so vielen Bewegungen (ohne
    /// abschließende Pause). Übersprungene Bewegungen zählen mit.
    pub fn run(
        &mut self,
        destinations: Destinations,
        move_limit: usize,
        pause: PauseRange,
    ) -> Result<RunSummary> {
        let mut fixed = match destinations {
            Destinations::Fixed(points) => Some(points.into_iter()),
            Destinations::Random => None,
        };
        let mut summary = RunSummary::default();

        loop {
            let destination = match fixed.as_mut() {
                Some(points) => match points.next() {
                    Some(point) => point,
                    None => break,
                },
                None => self.config.bounds.random_point(&mut self.rng),
            };

            log::info!("Bewegung {} → {}", summary.moves + 1, destination);
            match self.move_to(destination)? {
                MoveOutcome::Completed { points, speed } => {
                    log::debug!("{} Punkte mit Tempo {}", points, speed);
                    summary.points += points;
                }
                MoveOutcome::Skipped => summary.skipped += 1,
            }
            summary.moves += 1;

            if move_limit > 0 && summary.moves >= move_limit {
                break;
            }

            let secs = self.rng.uniform(pause.min_secs, pause.max_secs);
            self.sleeper.sleep(Duration::from_secs_f64(secs.max(0.0)));
        }

        log::info!(
            "Fertig: {} Bewegungen ({} übersprungen), {} Punkte",
            summary.moves,
            summary.skipped,
            summary.points
        );
        Ok(summary)
    }

    /// Wartezeit nach einem Einzelschritt, plus Zufallsbremse unter Tempo 90.
    fn pace(&mut self, speed: Speed) {
        let mut delay = speed.step_interval();
        if speed.wants_slowdown() {
            let (low, high) = crate::core::speed::SLOWDOWN_RANGE_SECS;
            delay += Duration::from_secs_f64(self.rng.uniform(low, high));
        }
        if !delay.is_zero() {
            self.sleeper.sleep(delay);
        }
    }
}
