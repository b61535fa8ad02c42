//! Iteration commands

use workrest::client::models::TimeFrame;
use workrest::error::Result;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::print_json;

/// List the team's iterations, optionally by timeframe
pub async fn list(opts: &GlobalOptions, timeframe: Option<TimeFrame>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let iterations = ctx
        .client
        .get_team_iterations(&ctx.team_context()?, timeframe)
        .await?;
    print_json(&iterations)
}

pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let iteration = ctx
        .client
        .get_team_iteration(&ctx.team_context()?, id)
        .await?;
    print_json(&iteration)
}

pub async fn work_items(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let items = ctx
        .client
        .get_iteration_work_items(&ctx.team_context()?, id)
        .await?;
    print_json(&items)
}

pub async fn days_off(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let days_off = ctx
        .client
        .get_team_days_off(&ctx.team_context()?, id)
        .await?;
    print_json(&days_off)
}

pub async fn capacities(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let capacities = ctx
        .client
        .get_capacities(&ctx.team_context()?, id)
        .await?;
    print_json(&capacities)
}

/// Remove an iteration from the team's selection
pub async fn delete(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client
        .delete_team_iteration(&ctx.team_context()?, id)
        .await?;
    println!("Removed iteration {} from the team", id);
    Ok(())
}
