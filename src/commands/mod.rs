//! Command implementations for the ageguard binary

pub mod age;
pub mod change;
pub mod demo;
pub mod policy;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ageguard::config::{
    discover_config_path, missing_minimum_warning, Config, ConfigWarning, OutputFormat,
    PolicyConfig, Verbosity,
};
use ageguard::domain::policies::{AgeChangePolicy, PolicyRule};
use ageguard::infrastructure::events::{ConsoleEventSink, JsonEventSink};
use ageguard::{Person, PersonEventSink, PersonService};
use anyhow::{bail, Result};

use crate::cli::{Cli, Commands};

/// Resolved settings shared by every command
pub struct RunContext {
    pub config_path: Option<PathBuf>,
    pub policy: AgeChangePolicy,
    pub warnings: Vec<ConfigWarning>,
    pub format: OutputFormat,
    pub verbosity: Verbosity,
}

impl RunContext {
    /// Load config (explicit path, else discovered), then env, then CLI flags
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => Some(path.clone()),
            None => discover_config_path(Some(Path::new("."))),
        };

        let (config, mut warnings) = match &config_path {
            Some(path) => Config::load_with_warnings(path)?,
            None => (Config::default(), Vec::new()),
        };
        let file_rule = config.policy.rule;
        let config = config.with_env_overrides();

        let (rule_flag, minimum_flag) = match &cli.command {
            Commands::Change {
                policy, minimum, ..
            } => (*policy, *minimum),
            _ => (None, None),
        };
        let rule_file = config_path
            .as_deref()
            .filter(|_| file_rule == PolicyRule::MinimumAge);
        let (policy, warning) =
            resolve_policy(&config.policy, rule_flag, minimum_flag, rule_file)?;
        warnings.extend(warning);

        let format = if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        };
        let verbosity = if cli.quiet {
            Verbosity::Quiet
        } else if cli.verbose > 0 {
            Verbosity::Verbose
        } else {
            config.output.verbosity
        };

        Ok(Self {
            config_path,
            policy,
            warnings,
            format,
            verbosity,
        })
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print config warnings to stderr unless quiet
    pub fn report_warnings(&self) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        for warning in &self.warnings {
            eprintln!("⚠ {}", warning);
        }
    }

    pub fn event_sink(&self) -> Arc<dyn PersonEventSink> {
        match self.format {
            OutputFormat::Json => Arc::new(JsonEventSink::stdout()),
            OutputFormat::Text => Arc::new(ConsoleEventSink::stderr(self.verbosity)),
        }
    }

    pub fn service(&self) -> PersonService {
        PersonService::new(self.policy, self.event_sink())
    }
}

/// Command-line rule and minimum override the config and environment ones.
///
/// `--minimum` only makes sense for the `minimum_age` rule. An explicit
/// `--policy minimum_age` without any minimum is an error; a configured one
/// falls back to the default rule with a warning naming where the rule came
/// from (`rule_file`, or the environment when `None`).
fn resolve_policy(
    config: &PolicyConfig,
    rule_flag: Option<PolicyRule>,
    minimum_flag: Option<u64>,
    rule_file: Option<&Path>,
) -> Result<(AgeChangePolicy, Option<ConfigWarning>)> {
    let rule = rule_flag.unwrap_or(config.rule);
    if minimum_flag.is_some() && rule != PolicyRule::MinimumAge {
        bail!("--minimum only applies to the minimum_age policy");
    }

    let minimum = minimum_flag.or(config.minimum);
    match AgeChangePolicy::from_rule(rule, minimum) {
        Some(policy) => Ok((policy, None)),
        None if rule_flag.is_some() => bail!("--policy minimum_age requires --minimum"),
        None => Ok((
            AgeChangePolicy::default(),
            Some(missing_minimum_warning(rule_file)),
        )),
    }
}

/// Write a single NDJSON line to stdout
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", event)?;
    out.flush()
}

/// Final per-command result line
pub fn report_person(ctx: &RunContext, command: &str, person: &Person) -> Result<()> {
    if ctx.is_json() {
        emit(serde_json::json!({
            "event": "complete",
            "command": command,
            "name": person.name().as_str(),
            "age": person.current_age().years(),
        }))?;
    } else {
        println!("{} is {}", person.name(), person.current_age());
    }
    Ok(())
}
