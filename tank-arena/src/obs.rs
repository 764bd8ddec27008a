//! Observation of the learner.
use tank_core::{Obs, Pose};

/// Observation of [`TankArenaEnv`](crate::TankArenaEnv) from the learner's
/// point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct TankObs {
    /// Reload progress of the learner in `[0, 1]`.
    pub reload_ratio: f32,

    /// Health of the learner in `[0, 1]`.
    pub health_ratio: f32,

    /// Pose of the learner.
    pub pose: Pose,

    /// Pose of the opponent.
    pub enemy: Pose,

    /// Health of the opponent in `[0, 1]`.
    pub enemy_health_ratio: f32,
}

impl TankObs {
    /// Flattens the observation, headings encoded as sine and cosine.
    pub fn to_vec(&self) -> Vec<f32> {
        let (sin, cos) = self.pose.forward();
        let (enemy_sin, enemy_cos) = self.enemy.forward();
        vec![
            self.reload_ratio,
            self.health_ratio,
            self.pose.x,
            self.pose.z,
            sin,
            cos,
            self.enemy.x,
            self.enemy.z,
            enemy_sin,
            enemy_cos,
            self.enemy_health_ratio,
        ]
    }
}

impl Obs for TankObs {
    fn dummy() -> Self {
        Self {
            reload_ratio: 0.0,
            health_ratio: 0.0,
            pose: Pose::default(),
            enemy: Pose::default(),
            enemy_health_ratio: 0.0,
        }
    }
}
