//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TankError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Damage amounts must be strictly positive.
    #[error("Damage must be positive, got {0}")]
    InvalidDamage(i32),

    /// Elapsed time must be finite and non-negative.
    #[error("Delta time must be finite and non-negative, got {0}")]
    InvalidDeltaTime(f32),

    /// A discrete action code outside the range of its axis.
    #[error("Invalid action code {value} on axis {axis}")]
    InvalidAction {
        /// Name of the action axis.
        axis: &'static str,
        /// The rejected code.
        value: i32,
    },

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
