#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fleetcheck::{check_board, init_logging, random_board, Fleet, Verdict, BOARD_SIZE};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Validate a board read from a file or standard input.
    Check {
        #[arg(help = "Board file; reads standard input when omitted")]
        file: Option<PathBuf>,
    },
    /// Generate a random legal board and print it.
    Generate {
        #[arg(long, default_value_t = BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            let report = check_board(&input).map_err(|e| anyhow::anyhow!(e))?;
            match report.verdict() {
                Verdict::Valid => println!("valid"),
                Verdict::Invalid(violation) => {
                    println!("invalid: {}", violation);
                    std::process::exit(1);
                }
            }
        }
        Commands::Generate { size, seed } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let board = random_board(&mut rng, size, &Fleet::standard())
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", board);
        }
    }

    Ok(())
}
