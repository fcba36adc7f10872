//! Debug-Ausgabe geplanter Kurven als JSON Lines (ein Objekt pro Bewegung).

use crate::core::{CurveSketch, Point, Speed};
use anyhow::{Context, Result};
use glam::DVec2;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Ein Datensatz pro geplanter Bewegung.
#[derive(Debug, Serialize)]
struct CurveRecord<'a> {
    index: usize,
    start: Point,
    destination: Point,
    speed: Speed,
    dots_per_100: u32,
    coarse_sample_count: usize,
    /// `[Ziel, Scheitel, Start]`
    coarse_controls: &'a [DVec2],
    /// Start, verrauschte Stützpunkte, Ziel
    waypoints: Vec<DVec2>,
    trajectory: &'a [Point],
}

/// Schreibt Kurven fortlaufend in eine Datei; jede Zeile wird sofort geflusht,
/// damit auch ein per Ctrl-C abgebrochener Endlos-Lauf lesbar bleibt.
pub struct CurveDump {
    writer: BufWriter<File>,
    path: PathBuf,
    records: usize,
}

impl CurveDump {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Kurven-Datei {} nicht anlegbar", path.display()))?;
        log::info!("Kurven werden nach {} geschrieben", path.display());
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            records: 0,
        })
    }

    pub fn record(&mut self, sketch: &CurveSketch) -> Result<()> {
        let record = CurveRecord {
            index: self.records,
            start: sketch.start,
            destination: sketch.destination,
            speed: sketch.speed,
            dots_per_100: sketch.dots_per_100,
            coarse_sample_count: sketch.coarse_sample_count,
            coarse_controls: &sketch.coarse_controls,
            waypoints: sketch.waypoints_forward(),
            trajectory: sketch.trajectory.points(),
        };
        serde_json::to_writer(&mut self.writer, &record)
            .with_context(|| format!("Kurve {} nicht serialisierbar", self.records))?;
        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .with_context(|| format!("Schreiben nach {} fehlgeschlagen", self.path.display()))?;
        self.records += 1;
        Ok(())
    }

    /// Anzahl geschriebener Kurven.
    pub fn records(&self) -> usize {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{plan_sketch, MidpointRandom};

    #[test]
    fn test_writes_one_json_line_per_curve() {
        let path = std::env::temp_dir().join(format!(
            "human_mouse_move_curves_{}.jsonl",
            std::process::id()
        ));
        let mut dump = CurveDump::create(&path).expect("Datei muss anlegbar sein");
        let mut rng = MidpointRandom::default();
        for x in [200, 400] {
            let sketch = plan_sketch(Point::ZERO, Point::new(x, 0), Speed::new(80.0), &mut rng);
            dump.record(&sketch).expect("Schreiben muss klappen");
        }
        assert_eq!(dump.records(), 2);
        drop(dump);

        let content = std::fs::read_to_string(&path).expect("Datei muss lesbar sein");
        let _ = std::fs::remove_file(&path);
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).expect("jede Zeile ist JSON"))
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["index"], 1);
        assert_eq!(lines[1]["destination"], serde_json::json!([400, 0]));
        assert_eq!(lines[0]["coarse_controls"].as_array().map(Vec::len), Some(3));
        assert_eq!(lines[0]["waypoints"][0], serde_json::json!([0.0, 0.0]));
    }
}
