use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_config(dir: &Path, url: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!("url: {url}\ntoken: test-pat\nproject: P\nteam: T\n");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn workrest() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("workrest"));
    for var in [
        "WORKREST_CONFIG",
        "WORKREST_URL",
        "WORKREST_TOKEN",
        "WORKREST_PROJECT",
        "WORKREST_TEAM",
        "WORKREST_DEBUG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn iteration_list_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _iterations = server
        .mock("GET", "/P/T/_apis/work/teamsettings/iterations")
        .match_query(mockito::Matcher::UrlEncoded(
            "$timeframe".to_string(),
            "current".to_string(),
        ))
        .match_header("accept", "application/json;api-version=5.0-preview.1")
        .with_status(200)
        .with_body(r#"[ { "id": "it-1", "name": "Sprint 1" } ]"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    workrest()
        .args(["iteration", "list", "--timeframe", "current", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Sprint 1\""));

    Ok(())
}

#[test]
fn flags_override_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _plans = server
        .mock("GET", "/Other/_apis/work/plans")
        .match_header("accept", "application/json;api-version=7.1")
        .with_status(200)
        .with_body(r#"[ { "id": "plan-1", "name": "Train" } ]"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    workrest()
        .args(["plan", "list", "--project", "Other", "--api-version", "7.1"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("plan-1"));

    Ok(())
}

#[test]
fn works_without_config_file_when_flags_supply_connection() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _settings = server
        .mock("GET", "/P/_apis/work/teamsettings")
        .with_status(200)
        .with_body(r#"{ "workingDays": ["monday"] }"#)
        .create();

    let temp = tempdir()?;
    let missing = temp.path().join("absent.yaml");

    workrest()
        .args(["team", "settings", "--project", "P", "--token", "pat", "--url"])
        .arg(server.url())
        .arg("--config")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("monday"));

    Ok(())
}

#[test]
fn iteration_delete_reports_success() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let delete = server
        .mock("DELETE", "/P/T/_apis/work/teamsettings/iterations/abc")
        .with_status(204)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    workrest()
        .args(["iteration", "delete", "abc", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed iteration abc"));

    delete.assert();
    Ok(())
}

#[test]
fn api_error_goes_to_stderr_with_failure_exit() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _boards = server
        .mock("GET", "/P/T/_apis/work/boards")
        .with_status(401)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    workrest()
        .args(["board", "list", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Authentication failed"));

    Ok(())
}

#[test]
fn missing_url_shows_helpful_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("does-not-exist.yaml");

    workrest()
        .args(["backlog", "list", "--project", "P", "--token", "pat", "--config"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));

    Ok(())
}

#[test]
fn missing_project_shows_helpful_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("does-not-exist.yaml");

    workrest()
        .args(["process", "--url", "http://127.0.0.1:9", "--token", "pat", "--config"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project"));

    Ok(())
}

#[test]
fn configure_writes_private_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("cfg").join("config.yaml");

    workrest()
        .args([
            "configure",
            "--url",
            "https://dev.azure.com/fabrikam",
            "--token",
            "secret-pat",
            "--project",
            "Fabrikam",
            "--timeout-secs",
            "15",
            "--config",
        ])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved to"));

    let saved = fs::read_to_string(&config_path)?;
    assert!(saved.contains("url: https://dev.azure.com/fabrikam"));
    assert!(saved.contains("project: Fabrikam"));
    assert!(saved.contains("timeout_secs: 15"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&config_path)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    workrest()
        .args(["configure", "--show", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("****-pat"))
        .stdout(predicate::str::contains("secret-pat").not());

    Ok(())
}

#[test]
fn invalid_timeframe_is_rejected() {
    workrest()
        .args(["iteration", "list", "--timeframe", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeframe"));
}
