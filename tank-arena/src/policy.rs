//! Policies for [`TankArenaEnv`].
use crate::{TankArenaEnv, TankObs};
use serde::{Deserialize, Serialize};
use tank_core::{
    heuristic, Configurable, ControlInput, DiscreteAction, MoveCommand, Policy, Pose, TurnCommand,
};

/// Parameters of [`aim`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimConfig {
    /// Bearing error in degrees below which the tank stops turning.
    pub turn_deadband: f32,

    /// Bearing error in degrees below which the tank fires.
    pub fire_cone: f32,

    /// The tank drives forward while farther than this from the target.
    pub approach_distance: f32,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            turn_deadband: 2.0,
            fire_cone: 3.0,
            approach_distance: 15.0,
        }
    }
}

/// Signed bearing error in degrees, in `(-180, 180]`, positive when the
/// target is to the right.
pub fn bearing_error(from: &Pose, to: &Pose) -> f32 {
    let desired = (to.x - from.x).atan2(to.z - from.z).to_degrees();
    let diff = (desired - from.heading).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Emulates a human player chasing `target` with a stick and a fire button.
pub fn aim(from: &Pose, target: &Pose, reload_ratio: f32, config: &AimConfig) -> ControlInput {
    let error = bearing_error(from, target);

    let x = if error > config.turn_deadband {
        1.0
    } else if error < -config.turn_deadband {
        -1.0
    } else {
        0.0
    };
    let y = if error.abs() < 45.0 && from.distance(target) > config.approach_distance {
        1.0
    } else {
        0.0
    };

    ControlInput {
        x,
        y,
        fire_pressed: error.abs() <= config.fire_cone && reload_ratio >= 1.0,
    }
}

/// Drives toward the opponent and shoots at it.
pub struct ScriptedPolicy {
    config: AimConfig,
}

impl Policy<TankArenaEnv> for ScriptedPolicy {
    fn sample(&mut self, obs: &TankObs) -> DiscreteAction {
        let input = aim(&obs.pose, &obs.enemy, obs.reload_ratio, &self.config);
        heuristic(&input)
    }
}

impl Configurable<TankArenaEnv> for ScriptedPolicy {
    type Config = AimConfig;

    fn build(config: AimConfig) -> Self {
        Self { config }
    }
}

/// Samples every action axis uniformly.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    /// Creates a policy with its own random stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Policy<TankArenaEnv> for RandomPolicy {
    fn sample(&mut self, _obs: &TankObs) -> DiscreteAction {
        let movement = match self.rng.u8(..3) {
            0 => MoveCommand::Stop,
            1 => MoveCommand::Forward,
            _ => MoveCommand::Backward,
        };
        let turn = match self.rng.u8(..3) {
            0 => TurnCommand::None,
            1 => TurnCommand::Right,
            _ => TurnCommand::Left,
        };
        DiscreteAction::new(movement, turn, self.rng.bool())
    }
}
