//! Bewegungs-Backends: lesen die Zeigerposition und setzen sie absolut.

mod dry_run;
mod xdotool;

pub use dry_run::DryRunBackend;
pub use xdotool::{parse_mouse_location, XdotoolBackend};

use crate::core::{Point, Speed};
use anyhow::Result;

/// Schnittstelle zum Mauszeiger.
///
/// Fehler (`Err`) sind echte Backend-Ausfälle und werden weitergereicht.
/// Eine unbestimmbare Position ist dagegen kein Fehler: `Ok(None)`.
pub trait MouseBackend {
    /// Aktuelle Zeigerposition, `None` wenn nicht ermittelbar.
    fn position(&mut self) -> Result<Option<Point>>;

    /// Setzt den Zeiger auf `point`. `speed` darf ignoriert werden.
    fn move_to(&mut self, point: Point, speed: Speed) -> Result<()>;
}

impl<B: MouseBackend + ?Sized> MouseBackend for Box<B> {
    fn position(&mut self) -> Result<Option<Point>> {
        (**self).position()
    }

    fn move_to(&mut self, point: Point, speed: Speed) -> Result<()> {
        (**self).move_to(point, speed)
    }
}

/// Auswahl des Backends über die Kommandozeile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Xdotool,
    DryRun,
}

impl BackendKind {
    /// Erzeugt das gewählte Backend.
    pub fn create(self) -> Box<dyn MouseBackend> {
        match self {
            BackendKind::Xdotool => Box::new(XdotoolBackend::new()),
            BackendKind::DryRun => Box::new(DryRunBackend::default()),
        }
    }
}
