//! HTTP dispatcher tests against a local mock server

use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use workrest::client::models::{DayOfWeek, TeamSettingsPatch, TimeFrame};
use workrest::client::rate_limit::RequestClass;
use workrest::client::{Credentials, HttpDispatcher, TeamContext, WorkClient};
use workrest::error::{ApiError, Error};

// base64(":pat")
const BASIC_PAT: &str = "Basic OnBhdA==";

fn client_for(server: &Server) -> WorkClient<HttpDispatcher> {
    let dispatcher = HttpDispatcher::new(
        &server.url(),
        Credentials::Pat("pat".to_string()),
        Duration::from_secs(5),
    )
    .expect("valid base url");
    WorkClient::new(dispatcher)
}

fn ctx() -> TeamContext {
    TeamContext::new("P", "T")
}

#[tokio::test]
async fn get_team_iterations_sends_timeframe_version_and_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/P/T/_apis/work/teamsettings/iterations")
        .match_query(Matcher::UrlEncoded(
            "$timeframe".to_string(),
            "current".to_string(),
        ))
        .match_header("accept", "application/json;api-version=5.0-preview.1")
        .match_header("authorization", BASIC_PAT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": "a589a806-bf11-4d4f-a031-c19813331553",
                    "name": "Sprint 2",
                    "path": "Fabrikam-Fiber\\Sprint 2",
                    "attributes": { "timeFrame": "current" }
                }
            ]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let iterations = client
        .get_team_iterations(&ctx(), Some(TimeFrame::Current))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(iterations.len(), 1);
    assert_eq!(iterations[0].name.as_deref(), Some("Sprint 2"));
}

#[tokio::test]
async fn delete_team_iteration_with_no_content_resolves() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/P/T/_apis/work/teamsettings/iterations/abc")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client.delete_team_iteration(&ctx(), "abc").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn patch_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/P/T/_apis/work/teamsettings")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "workingDays": ["monday", "tuesday"] })))
        .with_status(200)
        .with_body(r#"{ "workingDays": ["monday", "tuesday"] }"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let patch = TeamSettingsPatch {
        working_days: Some(vec![DayOfWeek::Monday, DayOfWeek::Tuesday]),
        ..TeamSettingsPatch::default()
    };
    let settings = client.update_team_settings(&ctx(), &patch).await.unwrap();

    mock.assert_async().await;
    assert_eq!(settings.working_days.len(), 2);
}

#[tokio::test]
async fn api_version_override_reaches_accept_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/P/_apis/work/plans")
        .match_header("accept", "application/json;api-version=7.1")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server).with_api_version("7.1");
    let plans = client.get_plans("P").await.unwrap();

    mock.assert_async().await;
    assert!(plans.is_empty());
}

#[tokio::test]
async fn bearer_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/P/_apis/work/processconfiguration")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let dispatcher = HttpDispatcher::new(
        &server.url(),
        Credentials::Bearer("tok".to_string()),
        Duration::from_secs(5),
    )
    .unwrap();
    let client = WorkClient::new(dispatcher);
    client.get_process_configuration("P").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_carries_service_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/P/T/_apis/work/teamsettings/iterations/missing")
        .with_status(404)
        .with_body(r#"{ "message": "TF400499: iteration not found", "typeKey": "X" }"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .get_team_iteration(&ctx(), "missing")
        .await
        .unwrap_err();

    match err {
        Error::Api(ApiError::NotFound(msg)) => assert!(msg.contains("TF400499")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_and_forbidden() {
    let mut server = Server::new_async().await;
    let _unauthorized = server
        .mock("GET", "/P/_apis/work/plans")
        .with_status(401)
        .create_async()
        .await;
    let _forbidden = server
        .mock("GET", "/P/_apis/work/plans/p1")
        .with_status(403)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.get_plans("P").await,
        Err(Error::Api(ApiError::Unauthorized))
    ));
    assert!(matches!(
        client.get_plan("P", "p1").await,
        Err(Error::Api(ApiError::Forbidden))
    ));
}

#[tokio::test]
async fn conflict_and_server_error() {
    let mut server = Server::new_async().await;
    let _conflict = server
        .mock("DELETE", "/P/_apis/work/plans/p1")
        .with_status(409)
        .with_body(r#"{ "message": "revision mismatch" }"#)
        .create_async()
        .await;
    let _server_error = server
        .mock("GET", "/P/_apis/work/plans/p2")
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server);
    match client.delete_plan("P", "p1").await.unwrap_err() {
        Error::Api(ApiError::Conflict(msg)) => assert_eq!(msg, "revision mismatch"),
        other => panic!("Expected Conflict, got {:?}", other),
    }
    assert!(matches!(
        client.get_plan("P", "p2").await,
        Err(Error::Api(ApiError::ServerError(_)))
    ));
}

#[tokio::test]
async fn too_many_requests_activates_throttling() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/P/T/_apis/work/boards")
        .with_status(429)
        .with_header("retry-after", "7")
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(!client.dispatcher().is_throttled(RequestClass::Read));

    let err = client.get_boards(&ctx()).await.unwrap_err();

    match err {
        Error::Api(ApiError::RateLimit(wait)) => assert_eq!(wait, Duration::from_secs(7)),
        other => panic!("Expected RateLimit, got {:?}", other),
    }
    assert!(client.dispatcher().is_throttled(RequestClass::Read));
    assert!(!client.dispatcher().is_throttled(RequestClass::Write));
}

#[tokio::test]
async fn malformed_success_body_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/P/T/_apis/work/teamsettings")
        .with_status(200)
        .with_body("<html>sign in</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.get_team_settings(&ctx()).await,
        Err(Error::Api(ApiError::InvalidResponse(_)))
    ));
}

#[tokio::test]
async fn route_values_are_percent_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Fabrikam%20Fiber/Web%20Team/_apis/work/boards/Stories")
        .with_status(200)
        .with_body(r#"{ "id": "b1", "name": "Stories" }"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let ctx = TeamContext::new("Fabrikam Fiber", "Web Team");
    let board = client.get_board(&ctx, "Stories").await.unwrap();

    mock.assert_async().await;
    assert_eq!(board.name, "Stories");
}
