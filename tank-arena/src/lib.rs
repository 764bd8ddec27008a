#![warn(missing_docs)]
//! A headless arena for [`tank-core`](tank_core).
//!
//! Two tanks face each other in a circular arena. The learner is driven by a
//! [`Policy`](tank_core::Policy) through the [`Env`](tank_core::Env) trait;
//! the opponent either stands still or acts as a turret.
//!
//! ```no_run
//! use anyhow::Result;
//! use tank_arena::{AimConfig, ScriptedPolicy, TankArenaEnv, TankArenaEnvConfig};
//! use tank_core::{Configurable, DefaultEvaluator, Evaluator};
//!
//! fn main() -> Result<()> {
//!     env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
//!
//!     let config = TankArenaEnvConfig::default();
//!     let mut policy = ScriptedPolicy::build(AimConfig::default());
//!     let record = DefaultEvaluator::<TankArenaEnv>::new(&config, 42, 5)?.evaluate(&mut policy)?;
//!     println!("{:?}", record.get_scalar("Episode return")?);
//!     Ok(())
//! }
//! ```
mod body;
mod env;
mod obs;
mod policy;
mod projectile;
pub mod runner;
mod ui;

pub use body::KinematicBody;
pub use env::{
    ArenaInfo, ArenaTank, OpponentBehavior, ProjectileConfig, TankArenaEnv, TankArenaEnvConfig,
    LEARNER, OPPONENT,
};
pub use obs::TankObs;
pub use policy::{aim, bearing_error, AimConfig, RandomPolicy, ScriptedPolicy};
pub use projectile::{ProjectileEvent, ProjectileField};
pub use ui::StatusBars;
