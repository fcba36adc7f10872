//! Backend über das Kommandozeilen-Tool `xdotool` (X11).
//!
//! Ein Prozessaufruf pro Einzelschritt; die Geschwindigkeit wird ignoriert,
//! das Tempo kommt ausschließlich aus den Pausen des Abspiel-Treibers.

use super::MouseBackend;
use crate::core::{Point, Speed};
use anyhow::{bail, Context, Result};
use std::process::Command;

/// Steuert den Zeiger über `xdotool getmouselocation` / `xdotool mousemove`.
pub struct XdotoolBackend {
    program: String,
}

impl XdotoolBackend {
    pub fn new() -> Self {
        Self {
            program: "xdotool".to_string(),
        }
    }
}

impl Default for XdotoolBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseBackend for XdotoolBackend {
    fn position(&mut self) -> Result<Option<Point>> {
        let output = Command::new(&self.program)
            .arg("getmouselocation")
            .output()
            .with_context(|| format!("{} getmouselocation konnte nicht gestartet werden", self.program))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let location = parse_mouse_location(&stdout);
        if location.is_none() {
            log::debug!("Unlesbare Ausgabe von getmouselocation: {:?}", stdout.trim());
        }
        Ok(location)
    }

    fn move_to(&mut self, point: Point, _speed: Speed) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("mousemove")
            .arg(point.x.to_string())
            .arg(point.y.to_string())
            .status()
            .with_context(|| format!("{} mousemove konnte nicht gestartet werden", self.program))?;

        if !status.success() {
            bail!("{} mousemove {} {} beendet mit {}", self.program, point.x, point.y, status);
        }
        Ok(())
    }
}

/// Liest `x:123 y:456 screen:0 window:…` — nur die ersten beiden Felder zählen.
pub fn parse_mouse_location(output: &str) -> Option<Point> {
    let mut fields = output.split_whitespace();
    let x = fields.next()?.strip_prefix("x:")?.parse().ok()?;
    let y = fields.next()?.strip_prefix("y:")?.parse().ok()?;
    Some(Point::new(x, y))
}
