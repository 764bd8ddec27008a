use anyhow::Result;
use serde::Deserialize;
use std::io::Write;
use tank_core::{
    record::{BufferedRecorder, NullRecorder, Record, RecordValue},
    util::eval_with_recorder,
    Act, Configurable, DefaultEvaluator, Env, Evaluator, Obs, Policy, Step,
};
use tempdir::TempDir;

#[derive(Clone, Debug)]
struct Remaining(usize);

impl Obs for Remaining {
    fn dummy() -> Self {
        Remaining(0)
    }
}

#[derive(Clone, Debug)]
struct Advance(f32);

impl Act for Advance {}

/// Ends after `length + ix` steps, paying the reward of each action.
struct Countdown {
    length: usize,
    remaining: usize,
}

impl Env for Countdown {
    type Config = usize;
    type Obs = Remaining;
    type Act = Advance;
    type Info = ();

    fn build(config: &usize, _seed: i64) -> Result<Self> {
        Ok(Self {
            length: *config,
            remaining: *config,
        })
    }

    fn step(&mut self, a: &Advance) -> (Step<Self>, Record) {
        self.remaining -= 1;
        let step = Step::new(
            Remaining(self.remaining),
            a.clone(),
            a.0,
            self.remaining == 0,
            false,
            (),
        );
        (step, Record::empty())
    }

    fn reset(&mut self) -> Result<Remaining> {
        self.remaining = self.length;
        Ok(Remaining(self.remaining))
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Remaining> {
        self.remaining = self.length + ix;
        Ok(Remaining(self.remaining))
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone, Deserialize)]
struct FixedConfig {
    reward: f32,
}

struct Fixed(f32);

impl Policy<Countdown> for Fixed {
    fn sample(&mut self, _obs: &Remaining) -> Advance {
        Advance(self.0)
    }
}

impl Configurable<Countdown> for Fixed {
    type Config = FixedConfig;

    fn build(config: FixedConfig) -> Self {
        Fixed(config.reward)
    }
}

#[test]
fn eval_with_recorder_writes_every_step() -> Result<()> {
    init_logger();
    let mut env = Countdown::build(&3, 0)?;
    let mut recorder = BufferedRecorder::new();
    let returns = eval_with_recorder(&mut env, &mut Fixed(0.5), 2, &mut recorder)?;

    assert_eq!(returns, vec![1.5, 1.5]);
    assert_eq!(recorder.len(), 6);
    let steps: Vec<f32> = recorder
        .iter()
        .map(|r| r.get_scalar("step"))
        .collect::<Result<_, _>>()?;
    assert_eq!(steps, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);

    let returns = eval_with_recorder(&mut env, &mut Fixed(-1.0), 1, &mut NullRecorder)?;
    assert_eq!(returns, vec![-3.0]);
    Ok(())
}

#[test]
fn default_evaluator_averages_over_indexed_episodes() -> Result<()> {
    init_logger();
    let mut evaluator = DefaultEvaluator::<Countdown>::new(&2, 0, 3)?;
    let record = evaluator.evaluate(&mut Fixed(1.0))?;

    // episodes of 2, 3 and 4 steps
    assert_eq!(record.get_scalar("Episode return")?, 3.0);
    assert_eq!(record.get_scalar("Episode length")?, 3.0);
    assert_eq!(record.get_scalar("Success rate")?, 1.0);
    assert!(matches!(
        record.get("Datetime"),
        Some(RecordValue::DateTime(_))
    ));

    let record = evaluator.evaluate(&mut Fixed(-1.0))?;
    assert_eq!(record.get_scalar("Success rate")?, 0.0);
    Ok(())
}

#[test]
fn policy_from_yaml() -> Result<()> {
    init_logger();
    let dir = TempDir::new("tank_core_policy")?;
    let path = dir.path().join("policy.yaml");
    std::fs::File::create(&path)?.write_all(b"reward: 0.25\n")?;

    let mut policy = Fixed::build_from_path(&path)?;
    assert_eq!(policy.sample(&Remaining::dummy()).0, 0.25);
    Ok(())
}
