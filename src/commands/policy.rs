use anyhow::Result;

use super::{emit, RunContext};

pub fn cmd_policy(ctx: &RunContext) -> Result<()> {
    let policy = ctx.policy;
    let source = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());

    if ctx.is_json() {
        let warnings: Vec<String> = ctx.warnings.iter().map(|w| w.to_string()).collect();
        emit(serde_json::json!({
            "event": "complete",
            "command": "policy",
            "policy": policy.to_string(),
            "config": source,
            "warnings": warnings,
        }))?;
        return Ok(());
    }

    println!("policy: {}", policy);
    println!("config: {}", source.as_deref().unwrap_or("built-in defaults"));
    Ok(())
}
