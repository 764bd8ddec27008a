//! Two-tank arena.
mod config;
use crate::{
    body::KinematicBody,
    policy::{aim, AimConfig},
    projectile::{ProjectileEvent, ProjectileField},
    ui::StatusBars,
    TankObs,
};
use anyhow::Result;
pub use config::{OpponentBehavior, ProjectileConfig, TankArenaEnvConfig};
use log::{error, info, trace};
use serde::Serialize;
use tank_core::{
    heuristic,
    record::{Record, RecordValue},
    DamageOutcome, DiscreteAction, Env, Pose, Step, TankAgent, TankError, TankId, Zone,
};

/// Identifier of the tank controlled by the policy.
pub const LEARNER: TankId = TankId(0);

/// Identifier of the scripted opponent.
pub const OPPONENT: TankId = TankId(1);

/// A tank of the arena.
pub type ArenaTank = TankAgent<KinematicBody, StatusBars>;

/// Per-step information of [`TankArenaEnv`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArenaInfo {
    /// Steps taken in the current episode.
    pub steps: usize,

    /// Projectiles in flight after the step.
    pub projectiles: usize,
}

impl tank_core::Info for ArenaInfo {}

/// A circular arena with the learner and one opponent.
///
/// At the start of an episode the learner spawns at a uniformly random point
/// of a disc behind the arena centre with a random heading, and the opponent
/// stands in front of the centre facing the learner's side. Every step the
/// learner acts, both tanks tick, projectiles fly, and a learner that left
/// the arena is reported to its controller as [`Zone::OutOfBounds`].
///
/// The episode terminates when the learner's combat episode ends, and is
/// truncated after [`TankArenaEnvConfig::max_steps`] steps.
pub struct TankArenaEnv {
    config: TankArenaEnvConfig,
    seed: i64,
    rng: fastrand::Rng,
    learner: ArenaTank,
    opponent: ArenaTank,
    projectiles: ProjectileField,
    steps: usize,
}

impl TankArenaEnv {
    fn new_tank(id: TankId, config: &TankArenaEnvConfig) -> Result<ArenaTank, TankError> {
        let body = KinematicBody::new(
            config.tank.move_speed,
            config.tank.turn_speed,
            config.projectile.muzzle_offset,
        );
        TankAgent::new(id, &config.tank, body, StatusBars::default())
    }

    fn spawn_pose(&mut self) -> Pose {
        // sqrt keeps the density uniform over the disc
        let r = self.config.spawn_radius * self.rng.f32().sqrt();
        let theta = self.rng.f32() * std::f32::consts::TAU;
        let heading = self.rng.f32() * 360.0;
        Pose::new(
            r * theta.cos(),
            r * theta.sin() - self.config.spawn_offset,
            heading,
        )
    }

    fn start_episode(&mut self) -> TankObs {
        self.projectiles.clear();
        self.steps = 0;

        let pose = self.spawn_pose();
        self.learner.body_mut().place(pose);
        self.opponent
            .body_mut()
            .place(Pose::new(0.0, self.config.opponent_offset, 180.0));

        let episode = self.learner.begin_episode();
        self.opponent.begin_episode();
        info!(
            "Arena episode {} starts at ({:.2}, {:.2}), heading {:.1}",
            episode, pose.x, pose.z, pose.heading
        );

        self.observe()
    }

    fn tank_mut(&mut self, id: TankId) -> &mut ArenaTank {
        if id == OPPONENT {
            &mut self.opponent
        } else {
            &mut self.learner
        }
    }

    fn opponent_action(&self) -> DiscreteAction {
        match self.config.opponent {
            OpponentBehavior::Idle => DiscreteAction::idle(),
            OpponentBehavior::Turret => {
                let aim_config = AimConfig {
                    approach_distance: f32::INFINITY,
                    ..AimConfig::default()
                };
                let input = aim(
                    &self.opponent.pose(),
                    &self.learner.pose(),
                    self.opponent.observe(),
                    &aim_config,
                );
                heuristic(&input)
            }
        }
    }

    fn advance(&mut self, act: &DiscreteAction) -> Result<(), TankError> {
        let dt = self.config.dt;

        let opponent_act = self.opponent_action();
        self.learner.act(act, dt, &mut self.projectiles)?;
        self.opponent.act(&opponent_act, dt, &mut self.projectiles)?;
        self.learner.update(dt)?;
        self.opponent.update(dt)?;

        let tanks = [
            (LEARNER, self.learner.pose()),
            (OPPONENT, self.opponent.pose()),
        ];
        for event in self.projectiles.advance(dt, &tanks) {
            match event {
                ProjectileEvent::Hit {
                    owner,
                    target,
                    damage,
                } => {
                    let outcome = self.tank_mut(target).take_damage(damage)?;
                    self.tank_mut(owner)
                        .on_hit(outcome == DamageOutcome::Destroyed);
                }
                ProjectileEvent::Expired { owner } => self.tank_mut(owner).on_miss(),
            }
        }

        if self.learner.pose().norm() > self.config.arena_radius {
            self.learner.on_zone_entered(Zone::OutOfBounds);
        }
        Ok(())
    }

    /// Observation of the learner.
    pub fn observe(&self) -> TankObs {
        TankObs {
            reload_ratio: self.learner.observe(),
            health_ratio: self.learner.controller().health_ratio(),
            pose: self.learner.pose(),
            enemy: self.opponent.pose(),
            enemy_health_ratio: self.opponent.controller().health_ratio(),
        }
    }

    /// The tank controlled by the policy.
    pub fn learner(&self) -> &ArenaTank {
        &self.learner
    }

    /// The scripted opponent.
    pub fn opponent(&self) -> &ArenaTank {
        &self.opponent
    }

    /// Steps taken in the current episode.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Configuration the environment was built with.
    pub fn config(&self) -> &TankArenaEnvConfig {
        &self.config
    }
}

impl Env for TankArenaEnv {
    type Config = TankArenaEnvConfig;
    type Obs = TankObs;
    type Act = DiscreteAction;
    type Info = ArenaInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            seed,
            rng: fastrand::Rng::with_seed(seed as u64),
            learner: Self::new_tank(LEARNER, config)?,
            opponent: Self::new_tank(OPPONENT, config)?,
            projectiles: ProjectileField::new(config.projectile.clone()),
            steps: 0,
        })
    }

    fn reset(&mut self) -> Result<TankObs> {
        Ok(self.start_episode())
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<TankObs> {
        self.rng = fastrand::Rng::with_seed((self.seed as u64).wrapping_add(ix as u64));
        Ok(self.start_episode())
    }

    fn step(&mut self, act: &DiscreteAction) -> (Step<Self>, Record) {
        let failed = match self.advance(act) {
            Ok(()) => false,
            Err(e) => {
                error!("Arena step failed: {}", e);
                true
            }
        };
        self.steps += 1;

        let reward = self.learner.take_reward();
        let controller = self.learner.controller();
        let is_terminated = !controller.is_active();
        let is_truncated = !is_terminated && (failed || self.steps >= self.config.max_steps);
        trace!("Step {}, reward {}", self.steps, reward);

        let obs = self.observe();
        let mut record = Record::from_slice(&[
            ("health", RecordValue::Scalar(controller.health() as f32)),
            (
                "enemy_health",
                RecordValue::Scalar(self.opponent.controller().health() as f32),
            ),
            ("reload_ratio", RecordValue::Scalar(obs.reload_ratio)),
            ("obs", RecordValue::Array1(obs.to_vec())),
        ]);
        if let (true, Some(termination)) = (is_terminated, controller.termination()) {
            record.insert(
                "termination",
                RecordValue::String(termination.as_str().to_string()),
            );
        }
        if is_truncated {
            info!(
                "Arena episode {} truncated after {} steps",
                controller.episode(),
                self.steps
            );
        }

        let info = ArenaInfo {
            steps: self.steps,
            projectiles: self.projectiles.len(),
        };
        let step = Step::new(obs, *act, reward, is_terminated, is_truncated, info);
        (step, record)
    }
}
