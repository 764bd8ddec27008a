#![warn(missing_docs)]
//! Combat state machine and training-harness abstractions for a
//! reinforcement-learning controlled tank.
//!
//! * [`TankCombatController`] owns health, reload cooldown, rewards and the
//!   episode lifecycle of one tank.
//! * [`TankAgent`] binds a controller to the collaborators that move the
//!   tank ([`MovementExecutor`]), launch its projectiles
//!   ([`ProjectileSpawner`]) and display its status bars ([`StatusDisplay`]).
//! * [`Env`], [`Policy`] and [`Step`] are what a training harness talks to.
//!
//! ```rust
//! use tank_core::{FireResult, TankCombatController, TankConfig};
//!
//! let mut tank = TankCombatController::new(&TankConfig::default()).unwrap();
//! tank.reset_episode();
//! assert_eq!(tank.request_fire(), FireResult::Fired);
//! assert_eq!(tank.request_fire(), FireResult::Blocked);
//!
//! tank.on_miss();
//! tank.on_hit(false);
//! tank.on_hit(true);
//! assert!(!tank.is_active());
//! ```
pub mod combat;
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

pub use combat::{
    heuristic, wrap_degrees, ControlInput, DamageOutcome, DiscreteAction, EpisodePhase,
    FireResult, MoveCommand, MovementExecutor, Pose, ProjectileHandle, ProjectileSpawner,
    RewardConfig, StatusDisplay, TankAgent, TankCombatController, TankConfig, TankId, Termination,
    TurnCommand, Zone,
};
pub use error::TankError;

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
