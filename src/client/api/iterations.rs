//! Team iteration operations

use crate::client::WorkClient;
use crate::client::context::TeamContext;
use crate::client::dispatch::Dispatcher;
use crate::client::models::{
    IterationWorkItems, TeamSettingsDaysOff, TeamSettingsDaysOffPatch, TeamSettingsIteration,
    TimeFrame,
};
use crate::client::request::QueryParams;
use crate::client::routes;
use crate::error::Result;

impl<D: Dispatcher> WorkClient<D> {
    /// Remove an iteration from a team's selection.
    ///
    /// The iteration node itself is left in place.
    pub async fn delete_team_iteration(&self, ctx: &TeamContext, id: &str) -> Result<()> {
        let request = self
            .request(&routes::DELETE_TEAM_ITERATION)
            .team(ctx)
            .route("id", Some(id));
        self.send_empty(request).await
    }

    /// Get a team iteration by ID.
    pub async fn get_team_iteration(
        &self,
        ctx: &TeamContext,
        id: &str,
    ) -> Result<TeamSettingsIteration> {
        let request = self
            .request(&routes::GET_TEAM_ITERATION)
            .team(ctx)
            .route("id", Some(id));
        self.send(request).await
    }

    /// List a team's iterations, optionally filtered by timeframe.
    pub async fn get_team_iterations(
        &self,
        ctx: &TeamContext,
        timeframe: Option<TimeFrame>,
    ) -> Result<Vec<TeamSettingsIteration>> {
        let query = QueryParams::new().push_opt("$timeframe", timeframe);
        let request = self
            .request(&routes::GET_TEAM_ITERATIONS)
            .team(ctx)
            .query(query);
        self.send(request).await
    }

    /// Add an existing iteration node to a team's selection.
    pub async fn post_team_iteration(
        &self,
        ctx: &TeamContext,
        iteration: &TeamSettingsIteration,
    ) -> Result<TeamSettingsIteration> {
        let request = self
            .request(&routes::POST_TEAM_ITERATION)
            .team(ctx)
            .body(iteration)?;
        self.send(request).await
    }

    /// Get the team's days off for an iteration.
    pub async fn get_team_days_off(
        &self,
        ctx: &TeamContext,
        iteration_id: &str,
    ) -> Result<TeamSettingsDaysOff> {
        let request = self
            .request(&routes::GET_TEAM_DAYS_OFF)
            .team(ctx)
            .route("iterationId", Some(iteration_id));
        self.send(request).await
    }

    /// Replace the team's days off for an iteration.
    pub async fn update_team_days_off(
        &self,
        ctx: &TeamContext,
        iteration_id: &str,
        patch: &TeamSettingsDaysOffPatch,
    ) -> Result<TeamSettingsDaysOff> {
        let request = self
            .request(&routes::UPDATE_TEAM_DAYS_OFF)
            .team(ctx)
            .route("iterationId", Some(iteration_id))
            .body(patch)?;
        self.send(request).await
    }

    /// Get the work items assigned to an iteration.
    pub async fn get_iteration_work_items(
        &self,
        ctx: &TeamContext,
        iteration_id: &str,
    ) -> Result<IterationWorkItems> {
        let request = self
            .request(&routes::GET_ITERATION_WORK_ITEMS)
            .team(ctx)
            .route("iterationId", Some(iteration_id));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::client::models::{DateRange, TeamSettingsDaysOffPatch, TeamSettingsIteration, TimeFrame};
    use crate::client::{HttpMethod, MockDispatcher, TeamContext, WorkClient};

    fn ctx() -> TeamContext {
        TeamContext::new("P", "T")
    }

    #[tokio::test]
    async fn test_get_team_iterations_with_timeframe() {
        let client = WorkClient::new(MockDispatcher::new().with_response(json!([
            {
                "id": "a589a806-bf11-4d4f-a031-c19813331553",
                "name": "Sprint 2",
                "path": "Fabrikam-Fiber\\Release 1\\Sprint 2",
                "attributes": {
                    "startDate": "2024-03-04T00:00:00Z",
                    "finishDate": "2024-03-15T00:00:00Z",
                    "timeFrame": "current"
                }
            }
        ])));

        let iterations = client
            .get_team_iterations(&ctx(), Some(TimeFrame::Current))
            .await
            .unwrap();
        assert_eq!(iterations.len(), 1);
        assert_eq!(
            iterations[0].attributes.as_ref().unwrap().time_frame,
            Some(TimeFrame::Current)
        );

        let request = client.dispatcher().last_request().await;
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.api_version, "5.0-preview.1");
        assert_eq!(request.path(), "P/T/_apis/work/teamsettings/iterations");
        assert_eq!(request.query.get("$timeframe"), Some("current"));
        assert_eq!(
            request.path_and_query(),
            "P/T/_apis/work/teamsettings/iterations?$timeframe=current"
        );
    }

    #[tokio::test]
    async fn test_get_team_iterations_without_timeframe_has_no_query() {
        let client = WorkClient::new(MockDispatcher::new().with_response(json!([])));

        let iterations = client.get_team_iterations(&ctx(), None).await.unwrap();
        assert!(iterations.is_empty());

        let request = client.dispatcher().last_request().await;
        assert!(request.query.is_empty());
        assert_eq!(request.path_and_query(), "P/T/_apis/work/teamsettings/iterations");
    }

    #[tokio::test]
    async fn test_delete_team_iteration_resolves_to_unit() {
        let client = WorkClient::new(MockDispatcher::new().with_no_content());

        let result = client.delete_team_iteration(&ctx(), "abc").await;
        assert!(result.is_ok());

        let request = client.dispatcher().last_request().await;
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path(), "P/T/_apis/work/teamsettings/iterations/abc");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_post_team_iteration_sends_id_only() {
        let client = WorkClient::new(MockDispatcher::new().with_response(json!({
            "id": "it-9",
            "name": "Sprint 9"
        })));

        let added = client
            .post_team_iteration(&ctx(), &TeamSettingsIteration::with_id("it-9"))
            .await
            .unwrap();
        assert_eq!(added.name.as_deref(), Some("Sprint 9"));

        let request = client.dispatcher().last_request().await;
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "P/T/_apis/work/teamsettings/iterations");
        assert_eq!(request.body, Some(json!({ "id": "it-9" })));
    }

    #[tokio::test]
    async fn test_update_team_days_off() {
        let client = WorkClient::new(MockDispatcher::new().with_response(json!({ "daysOff": [] })));
        let patch = TeamSettingsDaysOffPatch {
            days_off: Some(vec![DateRange {
                start: Utc.with_ymd_and_hms(2024, 12, 24, 0, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2024, 12, 26, 0, 0, 0).unwrap(),
            }]),
        };

        let _ = client.update_team_days_off(&ctx(), "it-1", &patch).await.unwrap();

        let request = client.dispatcher().last_request().await;
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(
            request.path(),
            "P/T/_apis/work/teamsettings/iterations/it-1/teamdaysoff"
        );
        assert!(request.body.unwrap()["daysOff"].is_array());
    }

    #[tokio::test]
    async fn test_get_iteration_work_items() {
        let client = WorkClient::new(MockDispatcher::new().with_response(json!({
            "workItemRelations": [
                { "rel": null, "source": null, "target": { "id": 1, "url": "u1" } },
                { "rel": "System.LinkTypes.Hierarchy-Forward", "source": { "id": 1, "url": "u1" }, "target": { "id": 2, "url": "u2" } }
            ]
        })));

        let items = client.get_iteration_work_items(&ctx(), "it-1").await.unwrap();
        assert_eq!(items.work_item_relations.len(), 2);

        let request = client.dispatcher().last_request().await;
        assert_eq!(
            request.path(),
            "P/T/_apis/work/teamsettings/iterations/it-1/workitems"
        );
    }
}
