use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use td4_rs::{assemble, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble TD4 sources into a Logisim memory image"
)]
struct Opts {
    /// Emit code words as 8-digit binary instead of 2-digit hex
    #[arg(short, long)]
    binary: bool,
    /// Write the image to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Input assembly file
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let format = if opts.binary {
        OutputFormat::Binary
    } else {
        OutputFormat::Hex
    };

    let source = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let image = assemble(&source, format)
        .with_context(|| format!("assembling {}", opts.input.display()))?;

    match &opts.output {
        Some(path) => std::fs::write(path, &image)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout().write_all(&image)?,
    }
    Ok(())
}
