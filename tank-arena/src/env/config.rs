//! Configuration of [`TankArenaEnv`](super::TankArenaEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};
use tank_core::{TankConfig, TankError};

/// Projectile ballistics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Units per second.
    pub speed: f32,

    /// Distance after which a projectile counts as a miss.
    pub range: f32,

    /// Health removed from the tank that is hit.
    pub damage: i32,

    /// Distance from the centre of a tank within which a projectile hits it.
    pub hit_radius: f32,

    /// Distance from the centre of the hull to the muzzle.
    pub muzzle_offset: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 30.0,
            range: 40.0,
            damage: 25,
            hit_radius: 1.5,
            muzzle_offset: 2.0,
        }
    }
}

/// How the opponent behaves.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpponentBehavior {
    /// Never moves nor fires.
    Idle,
    /// Stays in place, turns toward the learner and fires when aligned.
    Turret,
}

impl Default for OpponentBehavior {
    fn default() -> Self {
        OpponentBehavior::Idle
    }
}

/// Configurations of [`TankArenaEnv`](super::TankArenaEnv).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TankArenaEnvConfig {
    /// Settings shared by both tanks.
    pub tank: TankConfig,

    /// Radius of the circular arena, centred at the origin.
    pub arena_radius: f32,

    /// Radius of the disc the learner spawns in.
    pub spawn_radius: f32,

    /// Distance of the learner's spawn disc behind the arena centre.
    pub spawn_offset: f32,

    /// Distance of the opponent in front of the arena centre.
    pub opponent_offset: f32,

    /// Simulated seconds per step.
    pub dt: f32,

    /// Steps after which an episode is truncated.
    pub max_steps: usize,

    /// Projectile ballistics.
    pub projectile: ProjectileConfig,

    /// Behaviour of the opponent.
    pub opponent: OpponentBehavior,
}

impl Default for TankArenaEnvConfig {
    fn default() -> Self {
        Self {
            tank: TankConfig::default(),
            arena_radius: 25.0,
            spawn_radius: 10.0,
            spawn_offset: 10.0,
            opponent_offset: 10.0,
            dt: 0.02,
            max_steps: 1000,
            projectile: ProjectileConfig::default(),
            opponent: OpponentBehavior::default(),
        }
    }
}

impl TankArenaEnvConfig {
    /// Sets the tank settings.
    pub fn tank(mut self, v: TankConfig) -> Self {
        self.tank = v;
        self
    }

    /// Sets the arena radius.
    pub fn arena_radius(mut self, v: f32) -> Self {
        self.arena_radius = v;
        self
    }

    /// Sets the step length in seconds.
    pub fn dt(mut self, v: f32) -> Self {
        self.dt = v;
        self
    }

    /// Sets the step limit.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the projectile ballistics.
    pub fn projectile(mut self, v: ProjectileConfig) -> Self {
        self.projectile = v;
        self
    }

    /// Sets the behaviour of the opponent.
    pub fn opponent(mut self, v: OpponentBehavior) -> Self {
        self.opponent = v;
        self
    }

    /// Checks that the arena can host both tanks and that time advances.
    pub fn validate(&self) -> Result<(), TankError> {
        self.tank.validate()?;

        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(TankError::Config(format!(
                "dt must be finite and positive, got {}",
                self.dt
            )));
        }
        if self.max_steps == 0 {
            return Err(TankError::Config("max_steps must be positive".to_string()));
        }
        if self.spawn_radius < 0.0 || self.spawn_offset < 0.0 || self.opponent_offset < 0.0 {
            return Err(TankError::Config(
                "spawn_radius, spawn_offset and opponent_offset must be non-negative".to_string(),
            ));
        }
        if self.spawn_offset + self.spawn_radius >= self.arena_radius {
            return Err(TankError::Config(format!(
                "spawn area reaches {} but the arena radius is {}",
                self.spawn_offset + self.spawn_radius,
                self.arena_radius
            )));
        }
        if self.opponent_offset >= self.arena_radius {
            return Err(TankError::Config(format!(
                "opponent_offset {} is outside the arena",
                self.opponent_offset
            )));
        }

        let p = &self.projectile;
        if p.damage <= 0 {
            return Err(TankError::Config(format!(
                "projectile damage must be positive, got {}",
                p.damage
            )));
        }
        if !(p.speed > 0.0 && p.range > 0.0 && p.hit_radius > 0.0 && p.muzzle_offset >= 0.0) {
            return Err(TankError::Config(
                "projectile speed, range and hit_radius must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Constructs [`TankArenaEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TankArenaEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
