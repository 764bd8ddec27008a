use tank_core::{
    wrap_degrees, DamageOutcome, EpisodePhase, FireResult, Pose, TankCombatController,
    TankConfig, Termination,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn active(max_health: i32, reload_time: f32) -> TankCombatController {
    init_logger();
    let config = TankConfig::default()
        .max_health(max_health)
        .reload_time(reload_time);
    let mut c = TankCombatController::new(&config).unwrap();
    c.reset_episode();
    c
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn reload_gating() {
    let mut c = active(100, 1.0);
    assert_eq!(c.request_fire(), FireResult::Fired);

    // 0.25 is exact in binary, so the partial sums below are exact too.
    for _ in 0..3 {
        c.tick(0.25).unwrap();
        assert_eq!(c.request_fire(), FireResult::Blocked);
    }
    c.tick(0.125).unwrap();
    assert_eq!(c.request_fire(), FireResult::Blocked);

    c.tick(0.125).unwrap();
    assert_eq!(c.time_since_last_shot(), 1.0);
    assert_eq!(c.request_fire(), FireResult::Fired);
    assert_eq!(c.time_since_last_shot(), 0.0);
    assert_eq!(c.request_fire(), FireResult::Blocked);
}

#[test]
fn reload_gating_in_a_single_long_tick() {
    let mut c = active(100, 0.5);
    assert_eq!(c.request_fire(), FireResult::Fired);
    c.tick(3.0).unwrap();
    assert_eq!(c.request_fire(), FireResult::Fired);
    assert_eq!(c.request_fire(), FireResult::Blocked);
}

#[test]
fn health_monotonicity() {
    let mut c = active(100, 1.0);
    let mut expected = 100;
    for d in &[5, 10, 1, 33] {
        assert_eq!(c.take_damage(*d), Ok(DamageOutcome::Damaged));
        expected -= d;
        assert_eq!(c.health(), expected);
    }

    assert_eq!(c.take_damage(51), Ok(DamageOutcome::Destroyed));
    assert!(!c.is_active());
    assert_eq!(c.take_damage(10), Ok(DamageOutcome::Ignored));
    assert_eq!(c.health(), 0);
}

#[test]
fn terminal_exclusivity() {
    let mut c = active(100, 1.0);
    c.on_boundary_exit();
    assert_eq!(c.phase(), EpisodePhase::Inactive);
    assert_eq!(c.termination(), Some(Termination::LeftArena));
    let reward = c.accumulated_reward();

    c.on_hit(true);
    assert_eq!(c.take_damage(1000), Ok(DamageOutcome::Ignored));
    c.on_boundary_exit();
    c.on_miss();
    c.on_hit(false);

    assert_eq!(c.accumulated_reward(), reward);
    assert_eq!(c.termination(), Some(Termination::LeftArena));
    assert_eq!(c.health(), 100);
    assert_eq!(c.request_fire(), FireResult::Blocked);
}

#[test]
fn reward_accounting() {
    let mut c = active(100, 1.0);
    c.on_miss();
    c.on_hit(false);
    c.on_hit(true);

    assert!(approx_eq(c.accumulated_reward(), 1.05));
    assert!(!c.is_active());
    assert_eq!(c.termination(), Some(Termination::EnemyDestroyed));
    assert!(c.termination().unwrap().is_success());
    assert!(approx_eq(c.take_reward(), 1.05));
}

#[test]
fn episode_reset_idempotence() {
    let mut c = active(80, 2.0);
    c.request_fire();
    c.tick(0.5).unwrap();
    c.take_damage(30).unwrap();
    c.on_miss();

    for episode in 2..5 {
        assert_eq!(c.reset_episode(), episode);
        assert_eq!(c.health(), 80);
        assert_eq!(c.time_since_last_shot(), 2.0);
        assert!(c.is_active());
        assert_eq!(c.accumulated_reward(), 0.0);
        assert_eq!(c.take_reward(), 0.0);
        assert_eq!(c.termination(), None);
    }
    assert_eq!(c.request_fire(), FireResult::Fired);

    c.on_boundary_exit();
    c.reset_episode();
    assert!(c.is_active());
    assert_eq!(c.request_fire(), FireResult::Fired);
}

#[test]
fn boundary_scenario() {
    let mut c = active(100, 1.0);
    assert_eq!(c.take_damage(30), Ok(DamageOutcome::Damaged));
    assert_eq!(c.health(), 70);
    assert!(c.is_active());
    assert_eq!(c.accumulated_reward(), 0.0);

    assert_eq!(c.take_damage(80), Ok(DamageOutcome::Destroyed));
    assert_eq!(c.health(), 0);
    assert_eq!(c.health_ratio(), 0.0);
    assert_eq!(c.accumulated_reward(), -1.0);
    assert!(!c.is_active());
    assert_eq!(c.termination(), Some(Termination::Destroyed));
}

#[test]
fn inactive_tick_is_noop() {
    let mut c = active(100, 1.0);
    c.request_fire();
    c.on_boundary_exit();
    c.tick(10.0).unwrap();
    assert_eq!(c.time_since_last_shot(), 0.0);
    assert_eq!(c.reload_ratio(), 0.0);
}

#[test]
fn headings_stay_within_a_full_turn() {
    assert_eq!(wrap_degrees(-45.0), 315.0);
    assert_eq!(wrap_degrees(720.0), 0.0);
    assert_eq!(Pose::new(0.0, 0.0, 450.0).heading, 90.0);
}
