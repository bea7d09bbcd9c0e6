// Host-side tests for config validation and the frontend-facing Simulation.

use glam::Vec2;
use seek_core::{
    Bounds, ConfigError, PointerTarget, SeekConfig, Simulation, TuningCommand, TOP_SPEED,
};

fn bounds() -> Bounds {
    Bounds::new(800.0, 600.0)
}

#[test]
fn default_config_is_valid() {
    let cfg = SeekConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.top_speed, TOP_SPEED);
}

#[test]
fn bad_top_speed_is_rejected() {
    for top_speed in [0.0, -1.0, f32::INFINITY] {
        let cfg = SeekConfig {
            top_speed,
            ..SeekConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::TopSpeed(top_speed)));
    }
    let nan = SeekConfig {
        top_speed: f32::NAN,
        ..SeekConfig::default()
    };
    assert!(matches!(nan.validate(), Err(ConfigError::TopSpeed(_))));
}

#[test]
fn tuning_below_floor_is_rejected() {
    let cfg = SeekConfig {
        accel_multiplier: 0.05,
        ..SeekConfig::default()
    };
    match cfg.validate() {
        Err(ConfigError::BelowFloor { name, .. }) => assert_eq!(name, "accel_multiplier"),
        other => panic!("unexpected {other:?}"),
    }

    let cfg = SeekConfig {
        rotation_factor: f32::NAN,
        ..SeekConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::BelowFloor {
            name: "rotation_factor",
            ..
        })
    ));
}

#[test]
fn config_error_messages_name_the_field() {
    let err = ConfigError::BelowFloor {
        name: "rotation_factor",
        value: 0.0,
        floor: 0.1,
    };
    assert!(err.to_string().contains("rotation_factor"));
    assert!(ConfigError::TopSpeed(-2.0).to_string().contains("-2"));
}

#[test]
fn new_rejects_invalid_config() {
    let cfg = SeekConfig {
        top_speed: 0.0,
        ..SeekConfig::default()
    };
    assert!(Simulation::new(cfg, bounds()).is_err());
}

#[test]
fn new_centres_mover_and_target() {
    let sim = Simulation::new(SeekConfig::default(), bounds()).unwrap();
    assert_eq!(sim.mover().position, Vec2::new(400.0, 300.0));
    assert_eq!(sim.target(), PointerTarget::new(400.0, 300.0));
    assert_eq!(sim.ticks(), 0);
    assert_eq!(sim.status_line(), "Accel: 0.50 | Rotation: 1.00");
}

#[test]
fn idle_pointer_keeps_mover_still() {
    let mut sim = Simulation::new(SeekConfig::default(), bounds()).unwrap();
    for _ in 0..10 {
        let out = sim.tick();
        assert_eq!(out.position, Vec2::new(400.0, 300.0));
        assert_eq!(out.rotation, 0.0);
    }
    assert_eq!(sim.ticks(), 10);
}

#[test]
fn tick_follows_pointer() {
    let mut sim = Simulation::new(SeekConfig::default(), bounds()).unwrap();
    sim.set_pointer(500.0, 300.0);
    let out = sim.tick();
    assert_eq!(out.position, Vec2::new(400.5, 300.0));
    assert_eq!(out.rotation, 0.0);
    assert_eq!(out.speed, 0.5);
    assert_eq!(sim.mover().velocity, Vec2::new(0.5, 0.0));
}

#[test]
fn dispatch_updates_tuning_used_by_next_tick() {
    let mut sim = Simulation::new(SeekConfig::default(), bounds()).unwrap();
    sim.dispatch(TuningCommand::IncreaseAccel);
    sim.dispatch(TuningCommand::IncreaseAccel);
    assert_eq!(sim.status_line(), "Accel: 0.90 | Rotation: 1.00");

    sim.set_pointer(400.0, 400.0);
    sim.tick();
    assert!((sim.mover().velocity.y - 0.9).abs() < 1e-5);
}

#[test]
fn configured_top_speed_limits_motion() {
    let cfg = SeekConfig {
        top_speed: 2.0,
        accel_multiplier: 1.5,
        ..SeekConfig::default()
    };
    let mut sim = Simulation::new(cfg, bounds()).unwrap();
    sim.set_pointer(100_000.0, 300.0);
    for _ in 0..5 {
        sim.tick();
    }
    assert!((sim.mover().velocity.length() - 2.0).abs() < 1e-5);
}

#[test]
fn resize_changes_wrap_extent() {
    let mut sim = Simulation::new(SeekConfig::default(), bounds()).unwrap();
    sim.resize(Bounds::new(200.0, 200.0));
    assert_eq!(sim.bounds(), Bounds::new(200.0, 200.0));

    // mover still at (400, 300), now outside: wraps on the next tick
    sim.set_pointer(400.0, 300.0);
    let out = sim.tick();
    assert_eq!(out.position, Vec2::new(0.0, 0.0));
}

#[test]
fn zero_size_resize_keeps_mover_in_place() {
    let mut sim = Simulation::new(SeekConfig::default(), bounds()).unwrap();
    sim.set_pointer(500.0, 300.0);
    for _ in 0..5 {
        sim.tick();
    }
    let before = sim.mover().position;

    // minimised window
    sim.resize(Bounds::new(0.0, 0.0));
    assert_eq!(sim.bounds(), bounds());
    let out = sim.tick();
    assert!(out.position.x > before.x);
    assert_eq!(out.position.y, 300.0);

    sim.resize(bounds());
    sim.tick();
    assert!(sim.mover().position.x > before.x);
    assert_ne!(sim.mover().position, Vec2::ZERO);
}

#[test]
fn degenerate_bounds_are_ignored() {
    let mut sim = Simulation::new(SeekConfig::default(), bounds()).unwrap();
    for b in [
        Bounds::new(0.0, 600.0),
        Bounds::new(800.0, 0.0),
        Bounds::new(-1.0, 600.0),
        Bounds::new(f32::NAN, 600.0),
    ] {
        sim.resize(b);
        assert_eq!(sim.bounds(), bounds());
    }
}
