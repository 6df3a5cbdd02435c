// End-to-end editing flows against the public session API

use bez_core::{BezError, Tolerance};
use bez_math::{dvec2, Point2};
use bez_session::{Session, SessionConfig};

fn quadratic_session() -> Session {
    let config = SessionConfig {
        stops: 100,
        initial_points: vec![
            dvec2(100.0, 500.0),
            dvec2(400.0, 50.0),
            dvec2(700.0, 500.0),
        ],
        ..Default::default()
    };
    Session::new(config).unwrap()
}

#[test]
fn adding_points_keeps_the_curve_in_place() {
    let tol = Tolerance::default();
    let mut session = quadratic_session();
    let before = session.curve_points().to_vec();

    for expected_len in 4..=7 {
        session.add_point().unwrap();
        assert_eq!(session.control_points().len(), expected_len);
        for (a, b) in before.iter().zip(session.curve_points()) {
            assert!(
                tol.pixel_eq(a.x, b.x) && tol.pixel_eq(a.y, b.y),
                "Curve moved from {} to {} after elevation",
                a,
                b
            );
        }
    }
}

#[test]
fn drag_updates_only_the_selected_point() {
    let mut session = quadratic_session();
    let original: Vec<Point2> = session.control_points().to_vec();

    assert_eq!(session.press(dvec2(401.0, 52.0)), Some(1));
    assert!(session.drag_to(dvec2(400.0, 300.0)).unwrap());
    assert!(session.drag_to(dvec2(420.0, 320.0)).unwrap());
    session.release();

    let moved = session.control_points();
    assert_eq!(moved[0], original[0]);
    assert_eq!(moved[1], dvec2(420.0, 320.0));
    assert_eq!(moved[2], original[2]);

    // Released: further drags do nothing
    assert!(!session.drag_to(dvec2(10.0, 10.0)).unwrap());
    assert_eq!(session.control_points()[1], dvec2(420.0, 320.0));
}

#[test]
fn frame_reflects_the_latest_mutation() {
    let mut session = quadratic_session();
    session.press(dvec2(700.0, 500.0));
    session.drag_to(dvec2(650.0, 450.0)).unwrap();

    let frame = session.frame();
    assert_eq!(frame.selected, Some(2));
    assert_eq!(frame.control_points.len(), 3);
    assert_eq!(frame.curve_points.len(), 101);
    assert_eq!(frame.curve_points[0], frame.control_points[0]);
    assert_eq!(frame.curve_points[100], frame.control_points[2]);
    assert_eq!(frame.control_point_size, 10);
    assert_eq!(frame.curve_point_size, 3);
}

#[test]
fn remove_walks_back_to_a_line() {
    let mut session = quadratic_session();
    session.remove_point().unwrap();
    assert!(!session.can_remove());
    assert!(session.remove_point().is_err());
    assert_eq!(session.control_points().len(), 2);
}

#[test]
fn config_round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");

    let config = SessionConfig {
        stops: 64,
        max_scale: 2.5,
        ..Default::default()
    };
    config.save_to_file(&path).unwrap();

    let loaded = SessionConfig::try_load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(SessionConfig::load_from_file(&path), config);
}

#[test]
fn config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    assert_eq!(SessionConfig::load_from_file(&missing), SessionConfig::default());
    assert!(SessionConfig::try_load(&missing).is_err());

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "stops = \"many\"\n").unwrap();
    assert_eq!(SessionConfig::load_from_file(&broken), SessionConfig::default());

    let invalid = dir.path().join("invalid.toml");
    std::fs::write(&invalid, "initial_points = [[1.0, 1.0]]\n").unwrap();
    assert_eq!(SessionConfig::load_from_file(&invalid), SessionConfig::default());
}

#[test]
fn config_with_nan_initial_point_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nan.toml");
    std::fs::write(&path, "initial_points = [[nan, 0.0], [1.0, 1.0]]\n").unwrap();

    assert!(matches!(SessionConfig::try_load(&path), Err(BezError::Config(_))));
    assert_eq!(SessionConfig::load_from_file(&path), SessionConfig::default());

    let config = SessionConfig {
        initial_points: vec![Point2::new(0.0, 0.0), Point2::new(f64::INFINITY, 5.0)],
        ..Default::default()
    };
    assert!(Session::new(config).is_err());
}

#[test]
fn session_rejects_invalid_config() {
    let config = SessionConfig {
        min_scale: 5.0,
        ..Default::default()
    };
    assert!(Session::new(config).is_err());
}
