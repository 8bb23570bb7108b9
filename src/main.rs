use anyhow::{bail, Result};
use bayes_roc::config::{OutputMode, RunConfig};
use bayes_roc::datasets;
use bayes_roc::render::Renderer;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bayes_roc",
    about = "ROC curves for a categorical naive-Bayes classifier"
)]
struct Cli {
    /// Log progress in detail, including the first fold's frequency tables.
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding cmc.data, mushroom.data and income.data.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Directory that saved curves are written to.
    #[arg(long, default_value = "graphs")]
    output_dir: PathBuf,

    /// Print curves to stdout instead of saving them.
    #[arg(long)]
    display: bool,

    /// Seed for the row shuffle. Omit for a fresh shuffle each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Run only the named dataset(s). Valid values: cmc, mushroom, income
    #[arg(long = "dataset")]
    datasets: Vec<String>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            data_dir: cli.data_dir,
            output_dir: cli.output_dir,
            output: if cli.display {
                OutputMode::Display
            } else {
                OutputMode::Save
            },
            verbose: cli.verbose,
            seed: cli.seed,
            datasets: cli.datasets,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from(cli);
    for name in &config.datasets {
        if datasets::find(name).is_none() {
            bail!("unknown dataset '{name}'");
        }
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut renderer = Renderer::new(config.output, config.output_dir.clone());

    // A failing dataset is reported and skipped; the others still run.
    let mut failed = 0;
    for dataset in datasets::ALL.iter().filter(|d| config.should_run(d.name)) {
        let result = datasets::run(dataset, &config, &mut rng).and_then(|curve| {
            info!(dataset = dataset.name, auc = curve.auc(), "ROC curve ready");
            renderer.render(&curve)?;
            Ok(())
        });
        if let Err(e) = result {
            error!(dataset = dataset.name, "{e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} dataset(s) failed");
    }
    info!("Done");
    Ok(())
}
