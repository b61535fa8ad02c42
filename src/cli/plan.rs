//! Delivery plan commands

use chrono::{DateTime, Utc};
use workrest::error::Result;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::print_json;

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let plans = ctx.client.get_plans(ctx.require_project()?).await?;
    print_json(&plans)
}

pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let plan = ctx.client.get_plan(ctx.require_project()?, id).await?;
    print_json(&plan)
}

/// Show delivery timeline data for a plan
pub async fn timeline(
    opts: &GlobalOptions,
    id: &str,
    revision: Option<i32>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let data = ctx
        .client
        .get_delivery_timeline_data(ctx.require_project()?, id, revision, start, end)
        .await?;
    print_json(&data)
}

pub async fn delete(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client.delete_plan(ctx.require_project()?, id).await?;
    println!("Deleted plan {}", id);
    Ok(())
}
