//! Team settings and process commands

use workrest::error::Result;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::print_json;

pub async fn settings(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let settings = ctx.client.get_team_settings(&ctx.team_context()?).await?;
    print_json(&settings)
}

/// Show the team's area paths
pub async fn field_values(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let values = ctx
        .client
        .get_team_field_values(&ctx.team_context()?)
        .await?;
    print_json(&values)
}

/// Show the project's process configuration
pub async fn process(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config = ctx
        .client
        .get_process_configuration(ctx.require_project()?)
        .await?;
    print_json(&config)
}
