use std::path::PathBuf;

use ageguard::PolicyRule;
use clap::{Parser, Subcommand};

/// Upper bound for `age --times`; every step is a separate event
pub const MAX_AGING_STEPS: u64 = 10_000;

/// ageguard - guarded mutable-age persons
#[derive(Parser, Debug)]
#[command(name = "ageguard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Print every aging step
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print rejections and results
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: ./ageguard.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Age John Doe (42) and legally change Hey Jude (48) to 42
    Demo,

    /// Create a person and age them
    Age {
        /// Person name
        #[arg(long)]
        name: String,

        /// Initial age
        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// How many years to add (at most 10000)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(0..=MAX_AGING_STEPS))]
        times: u64,
    },

    /// Create a person and legally change their age
    Change {
        /// Person name
        #[arg(long)]
        name: String,

        /// Initial age
        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        /// Requested new age
        #[arg(long, allow_negative_numbers = true)]
        to: i64,

        /// Legality rule (non_negative, non_decreasing, minimum_age)
        #[arg(long)]
        policy: Option<PolicyRule>,

        /// Threshold for the minimum_age rule (requires that rule)
        #[arg(long)]
        minimum: Option<u64>,
    },

    /// Show the effective legality policy and config warnings
    Policy,
}
