//! Combat state machine of a tank and the contracts of its collaborators.
mod action;
mod agent;
mod collab;
mod config;
mod controller;

pub use action::{heuristic, ControlInput, DiscreteAction, MoveCommand, TurnCommand};
pub use agent::TankAgent;
pub use collab::{
    wrap_degrees, MovementExecutor, Pose, ProjectileHandle, ProjectileSpawner, StatusDisplay,
    TankId, Zone,
};
pub use config::{RewardConfig, TankConfig};
pub use controller::{DamageOutcome, EpisodePhase, FireResult, TankCombatController, Termination};
