//! Configure command implementation

use workrest::config::Config;
use workrest::error::{ConfigError, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::context::apply_overrides;

/// Merge the global flags into the config file and save it, or print the
/// current configuration with `--show`.
pub fn run(opts: &GlobalOptions, timeout_secs: Option<u64>, show: bool) -> Result<()> {
    let mut config = Config::load_or_default_at(opts.config_ref())?;
    let path = Config::resolve_path(opts.config_ref())?;

    if show {
        let contents = serde_yaml::to_string(&config.redacted()).map_err(ConfigError::from)?;
        println!("# {}", path.display());
        print!("{}", contents);
        return Ok(());
    }

    apply_overrides(&mut config, opts);
    if timeout_secs.is_some() {
        config.timeout_secs = timeout_secs;
    }

    let saved = config.save_at(opts.config_ref())?;
    println!("Configuration saved to: {}", saved.display());

    if config.url.is_none() {
        println!("  No service URL set yet; pass --url to finish setup.");
    }
    if config.token.is_none() {
        println!("  No token set yet; pass --token to finish setup.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_merges_into_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "url: https://dev.azure.com/fabrikam\nproject: Old\n").unwrap();

        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            token: Some("pat".to_string()),
            project: Some("New".to_string()),
            ..GlobalOptions::default()
        };
        run(&opts, Some(10), false).unwrap();

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.url.as_deref(), Some("https://dev.azure.com/fabrikam"));
        assert_eq!(saved.token.as_deref(), Some("pat"));
        assert_eq!(saved.project.as_deref(), Some("New"));
        assert_eq!(saved.timeout_secs, Some(10));
    }

    #[test]
    fn test_show_does_not_write() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yaml");

        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            token: Some("pat".to_string()),
            ..GlobalOptions::default()
        };
        run(&opts, None, true).unwrap();

        assert!(!path.exists());
    }
}
