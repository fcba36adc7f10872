//! Backend ohne Display-Server: Position im Speicher, Bewegungen nur im Log.

use super::MouseBackend;
use crate::core::{Point, Speed};
use anyhow::Result;

#[derive(Debug, Clone, Default)]
pub struct DryRunBackend {
    position: Point,
    moves: usize,
}

impl DryRunBackend {
    pub fn starting_at(position: Point) -> Self {
        Self { position, moves: 0 }
    }

    /// Anzahl bisher ausgeführter Einzelschritte.
    pub fn moves(&self) -> usize {
        self.moves
    }
}

impl MouseBackend for DryRunBackend {
    fn position(&mut self) -> Result<Option<Point>> {
        Ok(Some(self.position))
    }

    fn move_to(&mut self, point: Point, speed: Speed) -> Result<()> {
        log::trace!("dry-run: mousemove {} (speed {})", point, speed);
        self.position = point;
        self.moves += 1;
        Ok(())
    }
}
