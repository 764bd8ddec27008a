//! Runs complete episodes and summarises them.
use crate::TankArenaEnv;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tank_core::{Env, Policy};

/// Outcome of one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Index of the episode in the run.
    pub episode: usize,

    /// Steps taken.
    pub steps: usize,

    /// Sum of the rewards.
    pub episode_return: f32,

    /// Cause of the end, `truncated` if the step limit was reached.
    pub termination: String,

    /// Health of the learner at the end.
    pub health: i32,

    /// Health of the opponent at the end.
    pub enemy_health: i32,
}

/// Runs `n_episodes` episodes, episode `i` started with
/// [`Env::reset_with_index`]`(i)`.
pub fn run_episodes<P>(
    env: &mut TankArenaEnv,
    policy: &mut P,
    n_episodes: usize,
) -> Result<Vec<EpisodeSummary>>
where
    P: Policy<TankArenaEnv>,
{
    let mut summaries = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut obs = env.reset_with_index(episode)?;
        let mut episode_return = 0.0;

        let steps = loop {
            let act = policy.sample(&obs);
            let (step, _) = env.step(&act);
            episode_return += step.reward;
            if step.is_done() {
                break step.info.steps;
            }
            obs = step.obs;
        };

        let learner = env.learner().controller();
        let termination = learner
            .termination()
            .map_or("truncated", |t| t.as_str())
            .to_string();
        let summary = EpisodeSummary {
            episode,
            steps,
            episode_return,
            termination,
            health: learner.health(),
            enemy_health: env.opponent().controller().health(),
        };
        info!(
            "Episode {}: {} after {} steps, return = {}",
            episode, summary.termination, steps, episode_return
        );
        summaries.push(summary);
    }

    Ok(summaries)
}

/// Writes summaries as CSV with a header row.
pub fn write_csv(path: impl AsRef<Path>, summaries: &[EpisodeSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for summary in summaries {
        wtr.serialize(summary)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads summaries written by [`write_csv`].
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<EpisodeSummary>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut summaries = Vec::new();
    for row in rdr.deserialize() {
        summaries.push(row?);
    }
    Ok(summaries)
}
