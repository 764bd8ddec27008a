//! Discrete actions of a tank.
use crate::{error::TankError, Act};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Movement along the hull direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCommand {
    /// Code `0`.
    Stop,
    /// Code `1`.
    Forward,
    /// Code `-1`.
    Backward,
}

impl MoveCommand {
    /// Sign applied to the linear speed.
    pub fn code(self) -> i32 {
        match self {
            MoveCommand::Stop => 0,
            MoveCommand::Forward => 1,
            MoveCommand::Backward => -1,
        }
    }
}

impl TryFrom<i32> for MoveCommand {
    type Error = TankError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MoveCommand::Stop),
            1 => Ok(MoveCommand::Forward),
            -1 => Ok(MoveCommand::Backward),
            value => Err(TankError::InvalidAction {
                axis: "move",
                value,
            }),
        }
    }
}

/// Rotation around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnCommand {
    /// Code `0`.
    None,
    /// Code `1`, clockwise seen from above.
    Right,
    /// Code `-1`.
    Left,
}

impl TurnCommand {
    /// Sign applied to the angular speed.
    pub fn code(self) -> i32 {
        match self {
            TurnCommand::None => 0,
            TurnCommand::Right => 1,
            TurnCommand::Left => -1,
        }
    }
}

impl TryFrom<i32> for TurnCommand {
    type Error = TankError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TurnCommand::None),
            1 => Ok(TurnCommand::Right),
            -1 => Ok(TurnCommand::Left),
            value => Err(TankError::InvalidAction {
                axis: "turn",
                value,
            }),
        }
    }
}

/// One decision of the policy, one command per control axis.
///
/// The harness encodes it as a buffer `[move, turn, fire]` with
/// `move, turn ∈ {-1, 0, 1}` and `fire ∈ {0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteAction {
    /// Movement command.
    pub movement: MoveCommand,

    /// Rotation command.
    pub turn: TurnCommand,

    /// Whether to pull the trigger.
    pub fire: bool,
}

impl DiscreteAction {
    /// Constructs an action.
    pub fn new(movement: MoveCommand, turn: TurnCommand, fire: bool) -> Self {
        Self {
            movement,
            turn,
            fire,
        }
    }

    /// Do nothing.
    pub fn idle() -> Self {
        Self::new(MoveCommand::Stop, TurnCommand::None, false)
    }
}

impl Default for DiscreteAction {
    fn default() -> Self {
        Self::idle()
    }
}

impl Act for DiscreteAction {}

impl TryFrom<[i32; 3]> for DiscreteAction {
    type Error = TankError;

    fn try_from(buf: [i32; 3]) -> Result<Self, Self::Error> {
        let fire = match buf[2] {
            0 => false,
            1 => true,
            value => {
                return Err(TankError::InvalidAction {
                    axis: "fire",
                    value,
                })
            }
        };
        Ok(Self {
            movement: MoveCommand::try_from(buf[0])?,
            turn: TurnCommand::try_from(buf[1])?,
            fire,
        })
    }
}

impl From<DiscreteAction> for [i32; 3] {
    fn from(a: DiscreteAction) -> Self {
        [a.movement.code(), a.turn.code(), a.fire as i32]
    }
}

/// State of a manual control device.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// Horizontal stick axis, positive to the right.
    pub x: f32,

    /// Vertical stick axis, positive forward.
    pub y: f32,

    /// Whether the fire button is held.
    pub fire_pressed: bool,
}

/// Maps manual control input to a discrete action.
///
/// Only the sign of each axis matters.
pub fn heuristic(input: &ControlInput) -> DiscreteAction {
    let movement = if input.y > 0.0 {
        MoveCommand::Forward
    } else if input.y < 0.0 {
        MoveCommand::Backward
    } else {
        MoveCommand::Stop
    };

    let turn = if input.x > 0.0 {
        TurnCommand::Right
    } else if input.x < 0.0 {
        TurnCommand::Left
    } else {
        TurnCommand::None
    };

    DiscreteAction::new(movement, turn, input.fire_pressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_buffer() {
        let a = DiscreteAction::try_from([1, -1, 1]).unwrap();
        assert_eq!(a.movement, MoveCommand::Forward);
        assert_eq!(a.turn, TurnCommand::Left);
        assert!(a.fire);

        let buf: [i32; 3] = DiscreteAction::idle().into();
        assert_eq!(buf, [0, 0, 0]);
    }

    #[test]
    fn test_action_out_of_range() {
        assert_eq!(
            DiscreteAction::try_from([2, 0, 0]),
            Err(TankError::InvalidAction {
                axis: "move",
                value: 2
            })
        );
        assert_eq!(
            DiscreteAction::try_from([0, -2, 0]),
            Err(TankError::InvalidAction {
                axis: "turn",
                value: -2
            })
        );
        assert_eq!(
            DiscreteAction::try_from([0, 0, -1]),
            Err(TankError::InvalidAction {
                axis: "fire",
                value: -1
            })
        );
    }

    #[test]
    fn test_heuristic() {
        let input = ControlInput {
            x: -0.3,
            y: 0.8,
            fire_pressed: true,
        };
        assert_eq!(
            heuristic(&input),
            DiscreteAction::new(MoveCommand::Forward, TurnCommand::Left, true)
        );

        let input = ControlInput {
            x: 0.5,
            y: -1.0,
            fire_pressed: false,
        };
        assert_eq!(
            heuristic(&input),
            DiscreteAction::new(MoveCommand::Backward, TurnCommand::Right, false)
        );

        assert_eq!(heuristic(&ControlInput::default()), DiscreteAction::idle());
    }
}
