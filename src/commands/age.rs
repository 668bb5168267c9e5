use anyhow::Result;

use super::{report_person, RunContext};

pub fn cmd_age(ctx: &RunContext, name: &str, age: i64, times: u64) -> Result<()> {
    let service = ctx.service();

    let mut person = service.create(name, age)?;
    service.age_by(&mut person, times);

    report_person(ctx, "age", &person)
}
