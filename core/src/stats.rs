use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Two-sided 95% quantile of the standard normal distribution.
pub const CONFIDENCE_95: f64 = 1.96;

/// Validated parameters of a Monte Carlo run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    pub size: Coord,
    pub trials: u32,
    pub seed: Option<u64>,
    pub strategy: SamplingStrategy,
}

impl StatsConfig {
    pub fn new(size: Coord, trials: u32) -> Result<Self> {
        let config = Self {
            size,
            trials,
            seed: None,
            strategy: SamplingStrategy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(PercolationError::InvalidDimension);
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidTrialCount);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Sample statistics over a set of thresholds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
}

impl Summary {
    /// With a single threshold the standard deviation and the interval are NaN.
    pub fn from_thresholds(thresholds: &[f64]) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(PercolationError::InvalidTrialCount);
        }

        let count = thresholds.len() as f64;
        let mean = thresholds.iter().sum::<f64>() / count;
        let squares: f64 = thresholds.iter().map(|&x| (x - mean) * (x - mean)).sum();
        let stddev = (squares / (count - 1.0)).sqrt();
        if thresholds.len() < 2 {
            log::warn!("standard deviation is undefined for a single trial");
        }

        let half_width = CONFIDENCE_95 * stddev / count.sqrt();
        Ok(Self {
            trials: thresholds.len(),
            mean,
            stddev,
            confidence_lo: mean - half_width,
            confidence_hi: mean + half_width,
        })
    }
}

/// Thresholds from `T` independent trials together with their summary.
#[derive(Clone, Debug, PartialEq)]
pub struct PercolationStats {
    config: StatsConfig,
    thresholds: Vec<f64>,
    summary: Summary,
}

impl PercolationStats {
    /// Runs every trial of `config`. Each trial gets its own source seeded from
    /// a master source, so a fixed seed reproduces the same thresholds
    /// regardless of how trials are scheduled.
    pub fn run(config: StatsConfig) -> Result<Self> {
        config.validate()?;
        let runner = TrialRunner::new(config.size, config.strategy)?;

        let mut master = match config.seed {
            Some(seed) => SeededSource::new(seed),
            None => SeededSource::from_entropy(),
        };
        log::info!(
            "running {} trials on a {}x{} grid, master seed {}",
            config.trials,
            config.size,
            config.size,
            master.seed()
        );
        let seeds: Vec<u64> = (0..config.trials).map(|_| master.next_seed()).collect();

        let started = Instant::now();
        let thresholds = run_seeded(&runner, &seeds)?;
        log::info!("finished {} trials in {:?}", thresholds.len(), started.elapsed());

        let summary = Summary::from_thresholds(&thresholds)?;
        Ok(Self {
            config,
            thresholds,
            summary,
        })
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    pub fn stddev(&self) -> f64 {
        self.summary.stddev
    }

    pub fn confidence_lo(&self) -> f64 {
        self.summary.confidence_lo
    }

    pub fn confidence_hi(&self) -> f64 {
        self.summary.confidence_hi
    }
}

#[cfg(not(feature = "parallel"))]
fn run_seeded(runner: &TrialRunner, seeds: &[u64]) -> Result<Vec<f64>> {
    seeds
        .iter()
        .map(|&seed| run_one(runner, seed))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_seeded(runner: &TrialRunner, seeds: &[u64]) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    seeds
        .par_iter()
        .map(|&seed| run_one(runner, seed))
        .collect()
}

fn run_one(runner: &TrialRunner, seed: u64) -> Result<f64> {
    let mut source = SeededSource::new(seed);
    runner.run(&mut source).map(|outcome| outcome.threshold)
}
