mod report;

use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "coil-cli",
    about = "Parse a coil configuration file and report its contents",
    version
)]
struct Args {
    /// Number of coil loops to be parsed in (must be positive)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    loops: u32,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            File::open(path)?.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let (parsed, outcome) = coil::parse_str(&buf, args.loops as usize)?;

    match outcome {
        coil::Reconciliation::Truncated { .. } => {
            println!(
                "\n -INFO: The config file contains more coil loops than \
                 the number that was asked to be parsed in!"
            );
        }
        coil::Reconciliation::Shrunk { .. } => {
            println!(
                "\n -INFO: The config file contains fewer coil loops than \
                 the number that was asked to be parsed in!"
            );
            println!(" -INFO: Parsed data structure reallocated!");
        }
        coil::Reconciliation::Unchanged { .. } => {}
    }

    report::write_report(&mut std::io::stdout().lock(), &parsed)?;

    Ok(())
}
