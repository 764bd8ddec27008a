//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment driven by a training harness.
///
/// The harness supplies one action per decision step and consumes the
/// reward and termination flags carried by the returned [`Step`]. It is also
/// responsible for calling [`Env::reset`] once an episode is done.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performs an environment step.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Starts a new episode and returns its first observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Starts a new episode with a given index.
    ///
    /// The index is used in an arbitrary way. For example, it can be used as a
    /// random seed, which makes evaluation runs reproducible.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;
}
