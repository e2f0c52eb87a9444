use clap::{Parser, Subcommand};
use std::path::PathBuf;

use thaid::id::FirstDigitPolicy;

#[derive(Parser, Debug)]
#[command(name = "thaid", version, about = "Thai national ID generator and validator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Config file (thaid.toml in the working directory is used when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Log progress to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate {
        #[arg(long, default_value_t = 1, help = "How many IDs to generate")]
        count: usize,
        #[arg(long, help = "Render IDs in the 1-4-5-2-1 card layout")]
        formatted: bool,
        #[arg(long, value_enum, help = "First-digit policy for generated IDs")]
        first_digit: Option<FirstDigitPolicy>,
        #[arg(long, help = "Seed the generator for reproducible output")]
        seed: Option<u64>,
    },
    Validate {
        #[arg(required_unless_present = "file")]
        ids: Vec<String>,
        #[arg(long, value_name = "FILE", help = "Read IDs from a file, one per line")]
        file: Option<PathBuf>,
    },
    Format {
        id: String,
    },
}
