//! Policy.
use super::Env;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

/// Chooses the next action of a tank from its observation.
///
/// Scripted controllers, random baselines and trained models all sit behind
/// this trait, so an [`Env`] does not care which one drives it.
pub trait Policy<E: Env> {
    /// Picks an action for `obs`.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// A policy built from a serde configuration.
pub trait Configurable<E: Env> {
    /// Parameters of the policy.
    type Config: Clone + DeserializeOwned;

    /// Builds the policy.
    fn build(config: Self::Config) -> Self;

    /// Reads the parameters from a YAML file and builds the policy.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let rdr = BufReader::new(File::open(path)?);
        let config: Self::Config = serde_yaml::from_reader(rdr)?;
        Ok(Self::build(config))
    }
}
