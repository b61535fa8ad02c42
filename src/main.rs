//! workrest CLI - query boards, backlogs, iterations and plans from the terminal

use clap::Parser;

mod cli;
mod output;

use cli::args::GlobalOptions;
use cli::{
    BacklogCommands, BoardCommands, Cli, Commands, IterationCommands, PlanCommands, TeamCommands,
};
use workrest::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Configure { timeout_secs, show } => {
            cli::configure::run(&opts, timeout_secs, show)
        }
        Commands::Backlog(cmd) => match cmd {
            BacklogCommands::Config => cli::backlog::config(&opts).await,
            BacklogCommands::List => cli::backlog::list(&opts).await,
            BacklogCommands::Get { id } => cli::backlog::get(&opts, &id).await,
            BacklogCommands::Items { backlog_id } => cli::backlog::items(&opts, &backlog_id).await,
        },
        Commands::Board(cmd) => match cmd {
            BoardCommands::List => cli::board::list(&opts).await,
            BoardCommands::Get { board } => cli::board::get(&opts, &board).await,
            BoardCommands::Columns { board } => cli::board::columns(&opts, &board).await,
            BoardCommands::Rows { board } => cli::board::rows(&opts, &board).await,
            BoardCommands::Charts { board } => cli::board::charts(&opts, &board).await,
            BoardCommands::Chart { board, name } => cli::board::chart(&opts, &board, &name).await,
        },
        Commands::Iteration(cmd) => match cmd {
            IterationCommands::List { timeframe } => cli::iteration::list(&opts, timeframe).await,
            IterationCommands::Get { id } => cli::iteration::get(&opts, &id).await,
            IterationCommands::WorkItems { id } => cli::iteration::work_items(&opts, &id).await,
            IterationCommands::DaysOff { id } => cli::iteration::days_off(&opts, &id).await,
            IterationCommands::Capacities { id } => cli::iteration::capacities(&opts, &id).await,
            IterationCommands::Delete { id } => cli::iteration::delete(&opts, &id).await,
        },
        Commands::Plan(cmd) => match cmd {
            PlanCommands::List => cli::plan::list(&opts).await,
            PlanCommands::Get { id } => cli::plan::get(&opts, &id).await,
            PlanCommands::Timeline {
                id,
                revision,
                start,
                end,
            } => cli::plan::timeline(&opts, &id, revision, start, end).await,
            PlanCommands::Delete { id } => cli::plan::delete(&opts, &id).await,
        },
        Commands::Team(cmd) => match cmd {
            TeamCommands::Settings => cli::team::settings(&opts).await,
            TeamCommands::FieldValues => cli::team::field_values(&opts).await,
        },
        Commands::Process => cli::team::process(&opts).await,
    }
}
