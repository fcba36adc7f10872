//! Integrationstests für Kurvenauswertung und Trajektorien-Planung über die öffentliche API.

use glam::DVec2;
use human_mouse_move::core::bezier::evaluate;
use human_mouse_move::core::trajectory::{coarse_sample_count, COARSE_MIN_SAMPLES};
use human_mouse_move::{plan, MidpointRandom, Point, SeededRandom, Speed};

#[test]
fn test_bezier_ends_match_control_sequence_ends() {
    let controls = [
        DVec2::new(12.0, 40.0),
        DVec2::new(80.0, -20.0),
        DVec2::new(150.0, 90.0),
        DVec2::new(210.0, 15.0),
        DVec2::new(333.0, 77.0),
    ];
    let samples = evaluate(&controls, 25);
    let first = samples[0];
    let last = samples[24];

    // t = 0 trifft den letzten, t = 1 den ersten Kontrollpunkt
    assert!((first - controls[4]).length() < 1e-9);
    assert!((last - controls[0]).length() < 1e-9);
}

#[test]
fn test_end_to_end_midpoint_walk() {
    let start = Point::new(0, 0);
    let destination = Point::new(500, 0);
    let speed = Speed::new(75.0);

    let trajectory = plan(start, destination, speed, &mut MidpointRandom::default());

    let expected_len = (speed.dots_per_100() * 500 / 100) as usize;
    assert_eq!(trajectory.len(), expected_len);
    assert_eq!(trajectory.first(), Some(start));
    assert_eq!(trajectory.last(), Some(destination));
    // Bogen liegt vollständig auf einer Seite (Vorzeichen +)
    assert!(trajectory.points().iter().all(|p| p.y >= 0));
    // x läuft monoton Richtung Ziel
    assert!(trajectory.points().windows(2).all(|w| w[0].x <= w[1].x));
}

#[test]
fn test_short_move_uses_coarse_floor() {
    let dots = Speed::new(90.0).dots_per_100();
    assert_eq!(coarse_sample_count(dots, 100.0), COARSE_MIN_SAMPLES);
}

#[test]
fn test_zero_distance_does_not_error() {
    let spot = Point::new(77, 33);
    let trajectory = plan(spot, spot, Speed::new(60.0), &mut SeededRandom::from_seed(0));
    assert!(!trajectory.is_empty());
    assert!(trajectory.points().iter().all(|p| *p == spot));
}
