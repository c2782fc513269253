use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::generate::{
    DEFAULT_OVERSAMPLE, DEFAULT_SIZES, GenerateOptions, default_out_dir, generate,
};

#[derive(Parser)]
#[command(version = crate::version::APP_VERSION, about = "Render the Notiv icon set")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory the PNG files are written to",
        default_value_os_t = default_out_dir()
    )]
    out_dir: PathBuf,
    #[arg(
        short,
        long,
        value_name = "SIZE",
        value_delimiter = ',',
        help = "Icon sizes in pixels",
        default_values_t = DEFAULT_SIZES
    )]
    sizes: Vec<u32>,
    #[arg(
        long,
        value_name = "N",
        help = "Render at N times the icon size before downsampling",
        default_value_t = DEFAULT_OVERSAMPLE
    )]
    oversample: u32,
}

impl From<Cli> for GenerateOptions {
    fn from(cli: Cli) -> Self {
        Self {
            out_dir: cli.out_dir,
            sizes: cli.sizes,
            oversample: cli.oversample,
        }
    }
}

fn initialize() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

pub fn run() -> Result<()> {
    initialize();

    let options = GenerateOptions::from(Cli::parse());
    generate(&options, |path| println!("Wrote {}", path.display())).with_context(|| {
        format!(
            "Failed to generate icons into {}",
            options.out_dir.display()
        )
    })?;

    Ok(())
}
