//! ageguard CLI - drive guarded mutable-age persons
//!
//! Usage: ageguard <COMMAND>
//!
//! Commands:
//!   demo    Age John Doe and legally change Hey Jude's age
//!   age     Create a person and age them
//!   change  Create a person and legally change their age
//!   policy  Show the effective legality policy

mod cli;
mod commands;

use ageguard::AgeGuardError;
use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::RunContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = RunContext::from_cli(&cli)?;
    ctx.report_warnings();

    let result = match cli.command {
        Commands::Demo => commands::demo::cmd_demo(&ctx),
        Commands::Age { name, age, times } => commands::age::cmd_age(&ctx, &name, age, times),
        Commands::Change { name, age, to, .. } => {
            commands::change::cmd_change(&ctx, &name, age, to)
        }
        Commands::Policy => commands::policy::cmd_policy(&ctx),
    };

    // Rejections were already reported through the event sink
    if let Err(err) = &result {
        if err
            .downcast_ref::<AgeGuardError>()
            .is_some_and(AgeGuardError::is_domain_rejection)
        {
            std::process::exit(1);
        }
    }
    result
}
