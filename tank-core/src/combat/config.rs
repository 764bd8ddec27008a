//! Configuration of a tank.
use crate::error::TankError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Reward magnitudes signalled by [`TankCombatController`](super::TankCombatController).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct RewardConfig {
    /// Projectile hit the enemy without destroying it.
    pub hit: f32,

    /// Projectile destroyed the enemy. Terminal.
    pub destroy: f32,

    /// Projectile expired without hitting anything.
    pub miss: f32,

    /// The tank itself was destroyed. Terminal.
    pub destroyed: f32,

    /// The tank left the arena. Terminal.
    pub boundary: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            hit: 0.1,
            destroy: 1.0,
            miss: -0.05,
            destroyed: -1.0,
            boundary: -1.0,
        }
    }
}

/// Configuration of a tank.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct TankConfig {
    /// Health at the start of every episode.
    pub max_health: i32,

    /// Linear speed in units per second.
    pub move_speed: f32,

    /// Angular speed in degrees per second.
    pub turn_speed: f32,

    /// Seconds between two shots.
    pub reload_time: f32,

    /// Reward shaping.
    pub rewards: RewardConfig,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            move_speed: 10.0,
            turn_speed: 180.0,
            reload_time: 1.0,
            rewards: RewardConfig::default(),
        }
    }
}

impl TankConfig {
    /// Sets the maximum health.
    pub fn max_health(mut self, v: i32) -> Self {
        self.max_health = v;
        self
    }

    /// Sets the linear speed.
    pub fn move_speed(mut self, v: f32) -> Self {
        self.move_speed = v;
        self
    }

    /// Sets the angular speed.
    pub fn turn_speed(mut self, v: f32) -> Self {
        self.turn_speed = v;
        self
    }

    /// Sets the reload time.
    pub fn reload_time(mut self, v: f32) -> Self {
        self.reload_time = v;
        self
    }

    /// Sets the reward shaping.
    pub fn rewards(mut self, v: RewardConfig) -> Self {
        self.rewards = v;
        self
    }

    /// Checks the values a controller relies on.
    pub fn validate(&self) -> Result<(), TankError> {
        if self.max_health <= 0 {
            return Err(TankError::Config(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        if !(self.reload_time.is_finite() && self.reload_time > 0.0) {
            return Err(TankError::Config(format!(
                "reload_time must be finite and positive, got {}",
                self.reload_time
            )));
        }
        if !(self.move_speed.is_finite() && self.move_speed >= 0.0) {
            return Err(TankError::Config(format!(
                "move_speed must be finite and non-negative, got {}",
                self.move_speed
            )));
        }
        if !(self.turn_speed.is_finite() && self.turn_speed >= 0.0) {
            return Err(TankError::Config(format!(
                "turn_speed must be finite and non-negative, got {}",
                self.turn_speed
            )));
        }
        Ok(())
    }

    /// Constructs [`TankConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TankConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
