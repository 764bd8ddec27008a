//! Kinematic tank hull.
use tank_core::{wrap_degrees, MoveCommand, MovementExecutor, Pose, TurnCommand};

/// A hull that moves exactly as commanded, without inertia or collisions.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pose: Pose,
    move_speed: f32,
    turn_speed: f32,
    muzzle_offset: f32,
}

impl KinematicBody {
    /// `move_speed` in units per second, `turn_speed` in degrees per second.
    pub fn new(move_speed: f32, turn_speed: f32, muzzle_offset: f32) -> Self {
        Self {
            pose: Pose::default(),
            move_speed,
            turn_speed,
            muzzle_offset,
        }
    }

    /// Teleports the hull.
    pub fn place(&mut self, pose: Pose) {
        self.pose = Pose::new(pose.x, pose.z, pose.heading);
    }
}

impl MovementExecutor for KinematicBody {
    fn apply_move(&mut self, command: MoveCommand, dt: f32) {
        let distance = self.move_speed * dt * command.code() as f32;
        let (fx, fz) = self.pose.forward();
        self.pose.x += fx * distance;
        self.pose.z += fz * distance;
    }

    fn apply_turn(&mut self, command: TurnCommand, dt: f32) {
        let angle = self.turn_speed * dt * command.code() as f32;
        self.pose.heading = wrap_degrees(self.pose.heading + angle);
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn muzzle(&self) -> Pose {
        let (fx, fz) = self.pose.forward();
        Pose {
            x: self.pose.x + fx * self.muzzle_offset,
            z: self.pose.z + fz * self.muzzle_offset,
            heading: self.pose.heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_along_heading() {
        let mut body = KinematicBody::new(10.0, 180.0, 2.0);
        body.place(Pose::new(0.0, 0.0, 90.0));
        body.apply_move(MoveCommand::Forward, 0.5);
        let pose = body.pose();
        assert!((pose.x - 5.0).abs() < 1e-5);
        assert!(pose.z.abs() < 1e-5);

        body.apply_move(MoveCommand::Backward, 0.25);
        assert!((body.pose().x - 2.5).abs() < 1e-5);

        body.apply_move(MoveCommand::Stop, 1.0);
        assert!((body.pose().x - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_turn_wraps() {
        let mut body = KinematicBody::new(10.0, 180.0, 2.0);
        body.place(Pose::new(0.0, 0.0, 10.0));
        body.apply_turn(TurnCommand::Left, 0.25);
        assert!((body.pose().heading - 325.0).abs() < 1e-4);
        body.apply_turn(TurnCommand::Right, 0.5);
        assert!((body.pose().heading - 55.0).abs() < 1e-4);
        body.apply_turn(TurnCommand::None, 0.5);
        assert!((body.pose().heading - 55.0).abs() < 1e-4);
    }

    #[test]
    fn test_muzzle_in_front_of_hull() {
        let mut body = KinematicBody::new(10.0, 180.0, 2.0);
        body.place(Pose::new(1.0, 1.0, 0.0));
        let muzzle = body.muzzle();
        assert!((muzzle.x - 1.0).abs() < 1e-5);
        assert!((muzzle.z - 3.0).abs() < 1e-5);
        assert_eq!(muzzle.heading, 0.0);
    }
}
