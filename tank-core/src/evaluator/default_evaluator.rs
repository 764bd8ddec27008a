//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::Result;
use chrono::Local;
use log::info;

/// Runs a fixed number of episodes and reports the average return.
///
/// Episode `i` is started with [`Env::reset_with_index`]`(i)`, so two
/// evaluators built from the same configuration and seed see the same
/// sequence of initial states.
///
/// The returned record holds:
///
/// * `"Episode return"`: mean of the per-episode returns
/// * `"Episode length"`: mean number of steps per episode
/// * `"Success rate"`: fraction of episodes that ended with a terminal state
///   and a positive return
/// * `"Datetime"`: when the evaluation finished
pub struct DefaultEvaluator<E: Env> {
    n_episodes: usize,
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;
        let mut steps_total = 0usize;
        let mut successes = 0usize;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;
            let mut r_episode = 0f32;

            loop {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act);
                r_episode += step.reward;
                steps_total += 1;
                if step.is_done() {
                    if step.is_terminated && r_episode > 0.0 {
                        successes += 1;
                    }
                    break;
                }
                prev_obs = step.obs;
            }

            info!("Evaluation episode {}, return = {}", ix, r_episode);
            r_total += r_episode;
        }

        let n = self.n_episodes.max(1) as f32;
        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_total / n)),
            ("Episode length", RecordValue::Scalar(steps_total as f32 / n)),
            ("Success rate", RecordValue::Scalar(successes as f32 / n)),
            ("Datetime", RecordValue::DateTime(Local::now())),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Builds the environment and the evaluator.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }
}
