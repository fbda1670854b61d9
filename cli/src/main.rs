use anyhow::Context;
use clap::{Parser, ValueEnum};
use percolation_core::{PercolationStats, SamplingStrategy, StatsConfig, Summary};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Sampling {
    /// Draw sites uniformly, re-draws of open sites are skipped
    Replacement,
    /// Open sites in the order of a random permutation
    Permutation,
}

impl From<Sampling> for SamplingStrategy {
    fn from(sampling: Sampling) -> Self {
        match sampling {
            Sampling::Replacement => Self::WithReplacement,
            Sampling::Permutation => Self::Permutation,
        }
    }
}

/// Estimate the site-percolation threshold of an N-by-N grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid dimension
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Number of independent trials
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How sites are drawn in each trial
    #[arg(long, value_enum, default_value_t = Sampling::Replacement)]
    sampling: Sampling,

    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    fn config(&self) -> anyhow::Result<StatsConfig> {
        let config = StatsConfig::new(self.size, self.trials)
            .context("invalid simulation parameters")?
            .with_strategy(self.sampling.into());
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

fn report(summary: &Summary) -> String {
    format!(
        "{:<23} = {}\n{:<23} = {}\n{:<23} = [{}, {}]\n",
        "mean",
        summary.mean,
        "stddev",
        summary.stddev,
        "95% confidence interval",
        summary.confidence_lo,
        summary.confidence_hi
    )
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    TermLogger::init(
        args.verbose.log_level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Error initializing logger")?;
    log::debug!("{args:?}");

    let stats = PercolationStats::run(args.config()?).context("simulation failed")?;
    print!("{}", report(&stats.summary()));
    Ok(())
}
