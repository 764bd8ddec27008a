//! Utilities for interaction of policies and environments.
use crate::{
    record::{Record, RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use log::info;

/// Runs episodes with a policy and returns the return of each episode.
///
/// Every step, including the last one of an episode, is written to
/// `recorder` together with the keys `reward`, `episode` and `step`.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<f32>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut rs = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset()?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        loop {
            let act = policy.sample(&prev_obs);
            let (step, mut record) = env.step(&act);
            r_total += step.reward;

            record.merge_inplace(Record::from_slice(&[
                ("reward", RecordValue::Scalar(step.reward)),
                ("episode", RecordValue::Scalar(episode as _)),
                ("step", RecordValue::Scalar(count_step as _)),
            ]));
            recorder.write(record);

            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
            count_step += 1;
        }

        info!(
            "Episode {:?}, {:?} steps, reward = {:?}",
            episode,
            count_step + 1,
            r_total
        );
        rs.push(r_total);
    }

    Ok(rs)
}
