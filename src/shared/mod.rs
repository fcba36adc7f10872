//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Konfiguration und Debug-Ausgabe, die sowohl `app` als auch `main` nutzen.

mod curve_dump;
pub mod options;

pub use curve_dump::CurveDump;
pub use options::MoveOptions;
