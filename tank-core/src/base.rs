//! Interfaces between the tank and a training harness.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Unlike vectorized environments, every environment in this crate emits
/// exactly one observation per step.
pub trait Obs: Clone + Debug {
    /// Returns a dummy observation, used before the first reset.
    fn dummy() -> Self;
}

/// An action of an environment.
pub trait Act: Clone + Debug {}
