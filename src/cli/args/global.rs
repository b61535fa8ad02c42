//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers take a single `&GlobalOptions`
//! instead of a growing parameter list.

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file. This struct captures the
/// flag/env layer (clap resolves the env vars); the config file is merged in
/// by `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path (defaults to ~/.workrest/config.yaml)
    pub config: Option<String>,

    pub url: Option<String>,

    pub token: Option<String>,

    /// Present the token as a bearer token
    pub bearer: bool,

    pub project: Option<String>,

    pub team: Option<String>,

    pub api_version: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            url: cli.url.clone(),
            token: cli.token.clone(),
            bearer: cli.bearer,
            project: cli.project.clone(),
            team: cli.team.clone(),
            api_version: cli.api_version.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
