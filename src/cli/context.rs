//! Command execution context
//!
//! Merges the config file with the global flags and builds the HTTP-backed
//! client, so handlers only deal with the call they make.

use workrest::client::{HttpDispatcher, TeamContext, WorkClient};
use workrest::config::{AuthScheme, Config};
use workrest::error::{ConfigError, Result};

use crate::cli::args::GlobalOptions;

/// Context for command execution containing the merged config and client.
pub struct CommandContext {
    pub config: Config,
    pub client: WorkClient<HttpDispatcher>,
}

impl CommandContext {
    /// Load config (a missing file is fine when flags cover it), apply flag
    /// overrides and build the client.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_or_default_at(opts.config_ref())?;
        apply_overrides(&mut config, opts);

        let dispatcher =
            HttpDispatcher::new(config.require_url()?, config.credentials()?, config.timeout())?;
        let mut client = WorkClient::new(dispatcher);
        if let Some(version) = &config.api_version {
            client = client.with_api_version(version.clone());
        }

        Ok(Self { config, client })
    }

    /// Project for project-scoped calls.
    pub fn require_project(&self) -> Result<&str> {
        self.config
            .project
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                ConfigError::Invalid(
                    "No project set. Pass --project or run `workrest configure --project <P>`."
                        .to_string(),
                )
                .into()
            })
    }

    /// Team context for team-scoped calls. Without a team the service falls
    /// back to the project's default team.
    pub fn team_context(&self) -> Result<TeamContext> {
        let project = self.require_project()?;
        Ok(TeamContext {
            project: Some(project.to_string()),
            team: self.config.team.clone(),
            ..TeamContext::default()
        })
    }
}

/// Overlay flag and env values on top of the file config.
pub fn apply_overrides(config: &mut Config, opts: &GlobalOptions) {
    if let Some(url) = &opts.url {
        config.url = Some(url.clone());
    }
    if let Some(token) = &opts.token {
        config.token = Some(token.clone());
    }
    if opts.bearer {
        config.auth = AuthScheme::Bearer;
    }
    if let Some(project) = &opts.project {
        config.project = Some(project.clone());
    }
    if let Some(team) = &opts.team {
        config.team = Some(team.clone());
    }
    if let Some(version) = &opts.api_version {
        config.api_version = Some(version.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workrest::error::Error;

    #[test]
    fn test_flags_override_file_values() {
        let mut config = Config {
            url: Some("https://old".to_string()),
            project: Some("Old".to_string()),
            team: Some("OldTeam".to_string()),
            ..Config::default()
        };
        let opts = GlobalOptions {
            project: Some("New".to_string()),
            bearer: true,
            ..GlobalOptions::default()
        };

        apply_overrides(&mut config, &opts);

        assert_eq!(config.url.as_deref(), Some("https://old"));
        assert_eq!(config.project.as_deref(), Some("New"));
        assert_eq!(config.team.as_deref(), Some("OldTeam"));
        assert_eq!(config.auth, AuthScheme::Bearer);
    }

    #[test]
    fn test_context_without_config_file_uses_flags() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.yaml");
        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            url: Some("https://dev.azure.com/fabrikam".to_string()),
            token: Some("pat".to_string()),
            project: Some("P".to_string()),
            api_version: Some("7.1".to_string()),
            ..GlobalOptions::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.client.api_version_override(), Some("7.1"));
        assert_eq!(ctx.team_context().unwrap().resolve(), (Some("P"), None));
    }

    #[test]
    fn test_context_requires_url() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.yaml");
        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            token: Some("pat".to_string()),
            ..GlobalOptions::default()
        };

        assert!(CommandContext::new(&opts).is_err());
    }

    #[test]
    fn test_missing_or_empty_project_is_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.yaml");
        let mut opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            url: Some("https://dev.azure.com/fabrikam".to_string()),
            token: Some("pat".to_string()),
            ..GlobalOptions::default()
        };

        let ctx = CommandContext::new(&opts).unwrap();
        match ctx.require_project() {
            Err(Error::Config(ConfigError::Invalid(msg))) => assert!(msg.contains("--project")),
            other => panic!("Expected ConfigError::Invalid, got {:?}", other),
        }

        opts.project = Some(String::new());
        let ctx = CommandContext::new(&opts).unwrap();
        assert!(matches!(
            ctx.team_context(),
            Err(Error::Config(ConfigError::Invalid(_)))
        ));
    }
}
