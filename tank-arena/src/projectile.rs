//! Projectiles in flight.
use crate::env::ProjectileConfig;
use log::trace;
use tank_core::{Pose, ProjectileHandle, ProjectileSpawner, TankId};

/// What happened to a projectile during [`ProjectileField::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileEvent {
    /// The projectile reached a tank other than its owner.
    Hit {
        /// Tank that fired.
        owner: TankId,
        /// Tank that was hit.
        target: TankId,
        /// Health to remove from the target.
        damage: i32,
    },
    /// The projectile travelled its full range.
    Expired {
        /// Tank that fired.
        owner: TankId,
    },
}

#[derive(Debug, Clone)]
struct Projectile {
    handle: ProjectileHandle,
    owner: TankId,
    pose: Pose,
    travelled: f32,
}

/// All projectiles of an arena.
///
/// Acts as the [`ProjectileSpawner`] of every tank. Each projectile flies in a
/// straight line and is removed after its first hit or once out of range.
#[derive(Debug, Clone)]
pub struct ProjectileField {
    config: ProjectileConfig,
    projectiles: Vec<Projectile>,
    next_handle: u64,
}

impl ProjectileField {
    /// Creates an empty field.
    pub fn new(config: ProjectileConfig) -> Self {
        Self {
            config,
            projectiles: Vec::new(),
            next_handle: 0,
        }
    }

    /// Number of projectiles in flight.
    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    /// `true` if nothing is in flight.
    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Removes every projectile.
    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    /// Moves every projectile by `dt` seconds and reports hits and misses.
    ///
    /// `tanks` holds the current pose of every tank that can be hit.
    pub fn advance(&mut self, dt: f32, tanks: &[(TankId, Pose)]) -> Vec<ProjectileEvent> {
        let step = self.config.speed * dt;
        let mut events = Vec::new();
        let config = &self.config;

        self.projectiles.retain_mut(|p| {
            let start = p.pose;
            let (fx, fz) = p.pose.forward();
            p.pose.x += fx * step;
            p.pose.z += fz * step;
            p.travelled += step;

            let hit = tanks.iter().find(|(id, pose)| {
                *id != p.owner && distance_to_path(pose, &start, step) <= config.hit_radius
            });
            if let Some((target, _)) = hit {
                trace!("Projectile {:?} hit {:?}", p.handle, target);
                events.push(ProjectileEvent::Hit {
                    owner: p.owner,
                    target: *target,
                    damage: config.damage,
                });
                return false;
            }
            if p.travelled >= config.range {
                trace!("Projectile {:?} expired", p.handle);
                events.push(ProjectileEvent::Expired { owner: p.owner });
                return false;
            }
            true
        });

        events
    }
}

/// Distance from `target` to the segment of length `step` that starts at
/// `start` and runs along its heading.
fn distance_to_path(target: &Pose, start: &Pose, step: f32) -> f32 {
    let (fx, fz) = start.forward();
    let along = ((target.x - start.x) * fx + (target.z - start.z) * fz)
        .max(0.0)
        .min(step);
    let closest = Pose {
        x: start.x + fx * along,
        z: start.z + fz * along,
        heading: start.heading,
    };
    target.distance(&closest)
}

impl ProjectileSpawner for ProjectileField {
    fn spawn(&mut self, origin: Pose, owner: TankId) -> ProjectileHandle {
        let handle = ProjectileHandle(self.next_handle);
        self.next_handle += 1;
        self.projectiles.push(Projectile {
            handle,
            owner,
            pose: origin,
            travelled: 0.0,
        });
        handle
    }
}
