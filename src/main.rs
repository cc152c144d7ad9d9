use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use strings_csv_gen::{run, RunOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "strings-csv-gen")]
#[command(version)]
#[command(about = "Generate Localizable.strings files from a semicolon-delimited translation table")]
struct Cli {
    /// Project directory holding the table and the generated output
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Translation table (default: <ROOT>/strings.csv)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output directory for the .lproj folders (default: <ROOT>/Generated)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Configuration file (default: <ROOT>/config.toml, optional)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep existing Localizable.strings files; new entries are appended
    #[arg(long)]
    no_clean: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            input: cli.input,
            output: cli.output,
            config: cli.config,
            clean: !cli.no_clean,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let options = RunOptions::from(Cli::parse());

    let config_path = options.config_path();
    let config = options
        .load_config()
        .with_context(|| format!("loading {}", config_path.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("strings_csv_gen={}", config.logging.level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(&options, &config)
        .with_context(|| format!("generating from {}", options.root.display()))?;

    Ok(())
}
