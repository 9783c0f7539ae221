//! Runs every declared property and prints a summary.
//!
//! Run with: `cargo run --example verify -- --cases 5000 --seed 42`

use auxiliary_methods::verify::{all_properties, CheckerConfig, Subject, Verifier};
use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;

#[derive(Parser)]
#[command(author, version, about = "Property-based verification of digit reversal, isomorphism and parity counting")]
struct Cli {
    /// Number of cases per property
    #[arg(short, long, default_value_t = 1000)]
    cases: usize,

    /// Base seed (drawn at random if absent)
    #[arg(short, long, value_name = "INT")]
    seed: Option<u64>,

    /// Only check properties whose name contains this substring
    #[arg(short, long, value_name = "STR")]
    filter: Option<String>,

    /// Maximum number of shrink steps per failure
    #[arg(long, default_value_t = 1000)]
    max_shrink_steps: usize,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level: simplelog::LevelFilter = cli
        .log_level
        .parse()
        .map_err(|_| eyre!("Unknown log level: {}", cli.log_level))?;
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = CheckerConfig::default()
        .with_cases(cli.cases)
        .with_max_shrink_steps(cli.max_shrink_steps);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut verifier = Verifier::new(config).with_properties(all_properties(&Subject::default()));
    if let Some(pattern) = &cli.filter {
        verifier = verifier.filter(pattern);
    }
    if verifier.is_empty() {
        bail!("No properties match the filter {:?}", cli.filter);
    }
    log::info!("Selected properties: {:?}", verifier.names());

    let summary = verifier.run();
    println!("{}", summary);

    if !summary.all_passed() {
        bail!("{} properties failed (seed {})", summary.failures().count(), summary.seed);
    }
    Ok(())
}
