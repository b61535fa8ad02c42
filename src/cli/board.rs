//! Board commands

use workrest::error::Result;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::print_json;

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let boards = ctx.client.get_boards(&ctx.team_context()?).await?;
    print_json(&boards)
}

pub async fn get(opts: &GlobalOptions, board: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let board = ctx.client.get_board(&ctx.team_context()?, board).await?;
    print_json(&board)
}

pub async fn columns(opts: &GlobalOptions, board: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let columns = ctx
        .client
        .get_board_columns(&ctx.team_context()?, board)
        .await?;
    print_json(&columns)
}

/// List a board's swimlanes
pub async fn rows(opts: &GlobalOptions, board: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let rows = ctx.client.get_board_rows(&ctx.team_context()?, board).await?;
    print_json(&rows)
}

pub async fn charts(opts: &GlobalOptions, board: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let charts = ctx
        .client
        .get_board_charts(&ctx.team_context()?, board)
        .await?;
    print_json(&charts)
}

pub async fn chart(opts: &GlobalOptions, board: &str, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let chart = ctx
        .client
        .get_board_chart(&ctx.team_context()?, board, name)
        .await?;
    print_json(&chart)
}
