//! Backlog commands

use workrest::error::Result;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::print_json;

/// Show the team's backlog configuration
pub async fn config(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config = ctx
        .client
        .get_backlog_configurations(&ctx.team_context()?)
        .await?;
    print_json(&config)
}

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backlogs = ctx.client.get_backlogs(&ctx.team_context()?).await?;
    print_json(&backlogs)
}

pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backlog = ctx.client.get_backlog(&ctx.team_context()?, id).await?;
    print_json(&backlog)
}

/// List the work items of a backlog level
pub async fn items(opts: &GlobalOptions, backlog_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let items = ctx
        .client
        .get_backlog_level_work_items(&ctx.team_context()?, backlog_id)
        .await?;
    print_json(&items)
}
