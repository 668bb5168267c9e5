//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AgeGuardError, AgeGuardResult};

pub use crate::domain::value_objects::ConfigWarning;
use crate::domain::policies::PolicyRule;
use crate::domain::value_objects::ConfigWarningKind;

use super::types::{Config, OutputFormat, Verbosity};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "ageguard.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AgeGuardResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AgeGuardError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                kind: ConfigWarningKind::UnknownKey,
                key: key.clone(),
                file: Some(path.to_path_buf()),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: project, then user
pub fn discover_config_path(project_root: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return Some(project_config);
        }
    }

    user_config_path().filter(|p| p.exists())
}

/// Warning for a `minimum_age` rule that ended up with no minimum.
///
/// `rule_file` is the config file that selected the rule; `None` means the
/// rule came from `AGEGUARD_POLICY`.
pub fn missing_minimum_warning(rule_file: Option<&Path>) -> ConfigWarning {
    match rule_file {
        Some(path) => ConfigWarning {
            kind: ConfigWarningKind::MissingValue,
            key: "minimum".to_string(),
            file: Some(path.to_path_buf()),
            line: fs::read_to_string(path)
                .ok()
                .and_then(|content| find_line_number(&content, "minimum_age")),
            suggestion: None,
        },
        None => ConfigWarning {
            kind: ConfigWarningKind::MissingValue,
            key: "AGEGUARD_MIN_AGE".to_string(),
            file: None,
            line: None,
            suggestion: None,
        },
    }
}

/// Apply AGEGUARD_* overrides; unparseable values are ignored
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // AGEGUARD_POLICY
    if let Some(rule) = lookup("AGEGUARD_POLICY").and_then(|v| v.parse::<PolicyRule>().ok()) {
        config.policy.rule = rule;
    }

    // AGEGUARD_MIN_AGE
    if let Some(minimum) = lookup("AGEGUARD_MIN_AGE").and_then(|v| v.trim().parse::<u64>().ok()) {
        config.policy.minimum = Some(minimum);
    }

    // AGEGUARD_FORMAT
    if let Some(format) = lookup("AGEGUARD_FORMAT") {
        match format.to_lowercase().as_str() {
            "json" => config.output.format = OutputFormat::Json,
            "text" => config.output.format = OutputFormat::Text,
            _ => {}
        }
    }

    // AGEGUARD_VERBOSITY
    if let Some(verbosity) = lookup("AGEGUARD_VERBOSITY") {
        match verbosity.to_lowercase().as_str() {
            "quiet" => config.output.verbosity = Verbosity::Quiet,
            "normal" => config.output.verbosity = Verbosity::Normal,
            "verbose" => config.output.verbosity = Verbosity::Verbose,
            _ => {}
        }
    }

    config
}

/// `$XDG_CONFIG_HOME/ageguard/config.toml`, else the platform config dir
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("ageguard").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["policy", "rule", "minimum", "output", "format", "verbosity"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
