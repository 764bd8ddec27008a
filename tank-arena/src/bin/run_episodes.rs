use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;
use tank_arena::{
    runner::{run_episodes, write_csv},
    AimConfig, RandomPolicy, ScriptedPolicy, TankArenaEnv, TankArenaEnvConfig,
};
use tank_core::{Configurable, Env};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    Scripted,
    Random,
}

/// Runs episodes in the tank arena and reports their outcome.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of episodes.
    #[arg(long, default_value_t = 10)]
    episodes: usize,

    /// Random seed of the arena and of the random policy.
    #[arg(long, default_value_t = 42)]
    seed: i64,

    /// YAML file with the arena configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// YAML file with the parameters of the scripted policy.
    #[arg(long)]
    policy_config: Option<PathBuf>,

    /// Policy driving the learner.
    #[arg(long, value_enum, default_value_t = PolicyKind::Scripted)]
    policy: PolicyKind,

    /// Writes one row per episode to this file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TankArenaEnvConfig::load(path)?,
        None => TankArenaEnvConfig::default(),
    };
    let mut env = TankArenaEnv::build(&config, args.seed)?;

    let summaries = match args.policy {
        PolicyKind::Scripted => {
            let mut policy = match &args.policy_config {
                Some(path) => ScriptedPolicy::build_from_path(path)?,
                None => ScriptedPolicy::build(AimConfig::default()),
            };
            run_episodes(&mut env, &mut policy, args.episodes)?
        }
        PolicyKind::Random => {
            let mut policy = RandomPolicy::new(args.seed as u64);
            run_episodes(&mut env, &mut policy, args.episodes)?
        }
    };

    let n = summaries.len().max(1) as f32;
    let mean_return = summaries.iter().map(|s| s.episode_return).sum::<f32>() / n;
    let wins = summaries
        .iter()
        .filter(|s| s.termination == "enemy_destroyed")
        .count();
    info!(
        "{} episodes, mean return = {}, enemy destroyed in {}",
        summaries.len(),
        mean_return,
        wins
    );

    if let Some(path) = &args.csv {
        write_csv(path, &summaries)?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
