use anyhow::Result;

use super::{report_person, RunContext};

/// `--policy` and `--minimum` are already folded into `ctx.policy`
pub fn cmd_change(ctx: &RunContext, name: &str, age: i64, to: i64) -> Result<()> {
    let service = ctx.service();

    let mut person = service.create(name, age)?;
    service.change_age_legally(&mut person, to)?;

    report_person(ctx, "change", &person)
}
