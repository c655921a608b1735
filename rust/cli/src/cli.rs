//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bingo", version, about = "Bingo card generation, validation and ball calling")]
pub struct BingoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported bingo variants
    Variants,
    /// Generate a card configuration
    Generate {
        /// Variant id (defaults to configuration)
        #[arg(long = "type")]
        variant: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        cards: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Row-major index of the free cell
        #[arg(long)]
        free_index: Option<usize>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<String>,
    },
    /// Validate a stored card configuration
    Validate {
        #[arg(long)]
        input: String,
        #[arg(long = "type")]
        variant: Option<String>,
        #[arg(long)]
        free_index: Option<usize>,
    },
    /// Render one card, marking called values and any winning line
    Show {
        #[arg(long)]
        config: String,
        /// Zero-based card number
        #[arg(long, default_value_t = 0)]
        card: usize,
        #[arg(long)]
        play_data: Option<String>,
        #[arg(long = "type")]
        variant: Option<String>,
        #[arg(long)]
        free_index: Option<usize>,
    },
    /// List cards that currently have a bingo
    Check {
        #[arg(long)]
        config: String,
        #[arg(long)]
        play_data: String,
        #[arg(long = "type")]
        variant: Option<String>,
        #[arg(long)]
        free_index: Option<usize>,
    },
    /// Mark a ball as called
    Call {
        #[arg(long)]
        play_data: String,
        #[arg(long)]
        value: u32,
        #[arg(long = "type")]
        variant: Option<String>,
        /// Append an audit record to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Revert a called ball
    Uncall {
        #[arg(long)]
        play_data: String,
        #[arg(long)]
        value: u32,
        #[arg(long = "type")]
        variant: Option<String>,
        #[arg(long)]
        log: Option<String>,
    },
    /// Clear every called ball (destructive)
    Reset {
        #[arg(long)]
        play_data: String,
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
        #[arg(long = "type")]
        variant: Option<String>,
        #[arg(long)]
        log: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
