//! Episode and combat state of a single tank.
use super::{RewardConfig, TankConfig};
use crate::error::TankError;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

/// Outcome of [`TankCombatController::request_fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// A projectile must be spawned.
    Fired,
    /// Still reloading, or no episode is running. The caller may retry later.
    Blocked,
}

/// Outcome of [`TankCombatController::take_damage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// No episode was running.
    Ignored,
    /// Health went down, the tank survives.
    Damaged,
    /// Health reached zero and the episode ended.
    Destroyed,
}

/// Lifecycle phase of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Before the first reset and after any terminal event.
    Inactive,
    /// Between a reset and a terminal event.
    Active,
}

/// Cause of the end of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The tank destroyed its enemy.
    EnemyDestroyed,
    /// The tank ran out of health.
    Destroyed,
    /// The tank left the arena.
    LeftArena,
}

impl Termination {
    /// Name used in records and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::EnemyDestroyed => "enemy_destroyed",
            Termination::Destroyed => "destroyed",
            Termination::LeftArena => "left_arena",
        }
    }

    /// `true` if the episode ended in favour of the tank.
    pub fn is_success(&self) -> bool {
        matches!(self, Termination::EnemyDestroyed)
    }
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Health, reload cooldown, rewards and episode lifecycle of one tank.
///
/// The controller is driven by explicit calls: a simulation loop calls
/// [`tick`](Self::tick) every frame, the action dispatcher calls
/// [`request_fire`](Self::request_fire), and the world reports hits, misses,
/// damage and boundary exits. Rewards accumulate until the harness drains
/// them with [`take_reward`](Self::take_reward).
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Inactive
///     Inactive --> Active: reset_episode
///     Active --> Active: reset_episode
///     Active --> Inactive: on_hit(true)
///     Active --> Inactive: lethal take_damage
///     Active --> Inactive: on_boundary_exit
/// ```
///
/// While inactive, every operation except [`reset_episode`](Self::reset_episode)
/// is a no-op, so the first terminal event of an episode is the only one that
/// counts.
#[derive(Debug, Clone)]
pub struct TankCombatController {
    max_health: i32,
    reload_time: f32,
    rewards: RewardConfig,

    health: i32,
    time_since_last_shot: f32,
    phase: EpisodePhase,
    accumulated_reward: f32,

    // Reward not yet handed to the harness.
    pending_reward: f32,

    episode: u64,
    termination: Option<Termination>,
}

impl TankCombatController {
    /// Builds an inactive controller.
    pub fn new(config: &TankConfig) -> Result<Self, TankError> {
        config.validate()?;
        Ok(Self {
            max_health: config.max_health,
            reload_time: config.reload_time,
            rewards: config.rewards.clone(),
            health: config.max_health,
            time_since_last_shot: config.reload_time,
            phase: EpisodePhase::Inactive,
            accumulated_reward: 0.0,
            pending_reward: 0.0,
            episode: 0,
            termination: None,
        })
    }

    /// Starts a new episode and returns its number, starting from 1.
    ///
    /// The tank comes back with full health and a loaded gun.
    pub fn reset_episode(&mut self) -> u64 {
        self.health = self.max_health;
        self.time_since_last_shot = self.reload_time;
        self.phase = EpisodePhase::Active;
        self.accumulated_reward = 0.0;
        self.pending_reward = 0.0;
        self.termination = None;
        self.episode += 1;
        info!("Episode {} started", self.episode);
        self.episode
    }

    /// Advances the reload timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Result<(), TankError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(TankError::InvalidDeltaTime(dt));
        }
        if self.is_active() {
            self.time_since_last_shot += dt;
            trace!("Reload ratio {}", self.reload_ratio());
        }
        Ok(())
    }

    /// Pulls the trigger.
    ///
    /// On [`FireResult::Fired`] the reload timer restarts and the caller must
    /// spawn exactly one projectile.
    pub fn request_fire(&mut self) -> FireResult {
        if !self.is_active() || self.time_since_last_shot < self.reload_time {
            return FireResult::Blocked;
        }
        self.time_since_last_shot = 0.0;
        debug!("Fired");
        FireResult::Fired
    }

    /// Reports that a projectile of this tank hit the enemy.
    pub fn on_hit(&mut self, target_destroyed: bool) {
        if !self.is_active() {
            return;
        }
        if target_destroyed {
            debug!("Hit target and destroyed it");
            self.add_reward(self.rewards.destroy);
            self.end_episode(Termination::EnemyDestroyed);
        } else {
            debug!("Hit target");
            self.add_reward(self.rewards.hit);
        }
    }

    /// Reports that a projectile of this tank expired without a hit.
    pub fn on_miss(&mut self) {
        if !self.is_active() {
            return;
        }
        debug!("Missed target");
        self.add_reward(self.rewards.miss);
    }

    /// Applies damage to this tank.
    ///
    /// `amount` must be positive. A lethal hit leaves the stored health at 0.
    pub fn take_damage(&mut self, amount: i32) -> Result<DamageOutcome, TankError> {
        if amount <= 0 {
            return Err(TankError::InvalidDamage(amount));
        }
        if !self.is_active() {
            return Ok(DamageOutcome::Ignored);
        }

        debug!("Tank took {} damage", amount);
        let remaining = self.health.saturating_sub(amount);
        if remaining <= 0 {
            self.health = 0;
            self.add_reward(self.rewards.destroyed);
            self.end_episode(Termination::Destroyed);
            Ok(DamageOutcome::Destroyed)
        } else {
            self.health = remaining;
            Ok(DamageOutcome::Damaged)
        }
    }

    /// Reports that the tank left the arena.
    pub fn on_boundary_exit(&mut self) {
        if !self.is_active() {
            return;
        }
        debug!("Left the arena");
        self.add_reward(self.rewards.boundary);
        self.end_episode(Termination::LeftArena);
    }

    /// Returns the reward accrued since the previous call and clears it.
    pub fn take_reward(&mut self) -> f32 {
        std::mem::replace(&mut self.pending_reward, 0.0)
    }

    /// Reload progress in `[0, 1]`, `1` meaning ready to fire.
    pub fn reload_ratio(&self) -> f32 {
        clamp01(self.time_since_last_shot / self.reload_time)
    }

    /// Health in `[0, 1]` relative to the maximum.
    pub fn health_ratio(&self) -> f32 {
        clamp01(self.health as f32 / self.max_health as f32)
    }

    /// Current health, never negative.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health at the start of an episode.
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Seconds between two shots.
    pub fn reload_time(&self) -> f32 {
        self.reload_time
    }

    /// Seconds since the last shot.
    pub fn time_since_last_shot(&self) -> f32 {
        self.time_since_last_shot
    }

    /// Sum of the rewards of the current (or last) episode.
    pub fn accumulated_reward(&self) -> f32 {
        self.accumulated_reward
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// `true` while an episode is running.
    pub fn is_active(&self) -> bool {
        self.phase == EpisodePhase::Active
    }

    /// Number of episodes started so far.
    pub fn episode(&self) -> u64 {
        self.episode
    }

    /// Cause of the last episode end, `None` while an episode is running.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    fn add_reward(&mut self, reward: f32) {
        self.accumulated_reward += reward;
        self.pending_reward += reward;
    }

    fn end_episode(&mut self, cause: Termination) {
        self.phase = EpisodePhase::Inactive;
        self.termination = Some(cause);
        info!(
            "Episode {} ended: {}, return = {}",
            self.episode,
            cause.as_str(),
            self.accumulated_reward
        );
    }
}

fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0).min(1.0)
    }
}
