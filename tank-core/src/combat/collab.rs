//! Contracts of the collaborators a tank relies on.
//!
//! Physics, projectiles and rendering live outside the combat state machine.
//! These traits are the only way [`TankAgent`](super::TankAgent) reaches them.
use super::{MoveCommand, TurnCommand};
use serde::{Deserialize, Serialize};

/// Identifier of a tank within an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TankId(pub u32);

/// Opaque handle returned by a [`ProjectileSpawner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileHandle(pub u64);

/// Position on the ground plane and heading.
///
/// `heading` is in degrees, clockwise from the +z axis, so that a heading of
/// 90 points along +x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Lateral coordinate.
    pub x: f32,
    /// Longitudinal coordinate.
    pub z: f32,
    /// Heading in degrees.
    pub heading: f32,
}

impl Pose {
    /// Constructs a pose, wrapping the heading into `[0, 360)`.
    pub fn new(x: f32, z: f32, heading: f32) -> Self {
        Self {
            x,
            z,
            heading: wrap_degrees(heading),
        }
    }

    /// Unit vector `(x, z)` along the heading.
    pub fn forward(&self) -> (f32, f32) {
        let rad = self.heading.to_radians();
        (rad.sin(), rad.cos())
    }

    /// Distance to another pose on the ground plane.
    pub fn distance(&self, other: &Pose) -> f32 {
        (self.x - other.x).hypot(self.z - other.z)
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f32 {
        self.x.hypot(self.z)
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f32) -> f32 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Applies movement commands to the body of a tank.
pub trait MovementExecutor {
    /// Moves along the heading for `dt` seconds.
    fn apply_move(&mut self, command: MoveCommand, dt: f32);

    /// Turns around the vertical axis for `dt` seconds.
    fn apply_turn(&mut self, command: TurnCommand, dt: f32);

    /// Current pose of the hull.
    fn pose(&self) -> Pose;

    /// Pose at which projectiles leave the barrel.
    fn muzzle(&self) -> Pose {
        self.pose()
    }
}

/// Creates and launches projectiles.
pub trait ProjectileSpawner {
    /// Launches a projectile owned by `owner` from `origin`.
    fn spawn(&mut self, origin: Pose, owner: TankId) -> ProjectileHandle;
}

/// Displays the status bars of a tank. Fills are in `[0, 1]`.
pub trait StatusDisplay {
    /// Sets the fill of the reload bar.
    fn set_reload_fill(&mut self, ratio: f32);

    /// Sets the fill of the health bar.
    fn set_health_fill(&mut self, ratio: f32);
}

/// Category of a trigger zone a tank may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// The playing field.
    Arena,
    /// Anything beyond the edge of the playing field.
    OutOfBounds,
}
