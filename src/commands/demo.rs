use anyhow::Result;

use super::{report_person, RunContext};

/// The two sample persons: one aged, one legally changed
pub fn cmd_demo(ctx: &RunContext) -> Result<()> {
    let service = ctx.service();

    let mut x = service.create("John Doe", 42)?;
    let mut y = service.create("Hey Jude", 48)?;

    service.age(&mut x);
    service.change_age_legally(&mut y, 42)?;

    report_person(ctx, "demo", &x)?;
    report_person(ctx, "demo", &y)?;
    Ok(())
}
