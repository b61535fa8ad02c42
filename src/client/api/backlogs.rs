//! Backlog operations

use crate::client::context::TeamContext;
use crate::client::dispatch::Dispatcher;
use crate::client::models::{
    BacklogConfiguration, BacklogLevelConfiguration, BacklogLevelWorkItems, ProcessConfiguration,
};
use crate::client::routes;
use crate::client::WorkClient;
use crate::error::Result;

impl<D: Dispatcher> WorkClient<D> {
    /// Get the backlog configuration for a team.
    pub async fn get_backlog_configurations(
        &self,
        ctx: &TeamContext,
    ) -> Result<BacklogConfiguration> {
        let request = self.request(&routes::GET_BACKLOG_CONFIGURATIONS).team(ctx);
        self.send(request).await
    }

    /// Get the work items within a backlog level.
    pub async fn get_backlog_level_work_items(
        &self,
        ctx: &TeamContext,
        backlog_id: &str,
    ) -> Result<BacklogLevelWorkItems> {
        let request = self
            .request(&routes::GET_BACKLOG_LEVEL_WORK_ITEMS)
            .team(ctx)
            .route("backlogId", Some(backlog_id));
        self.send(request).await
    }

    /// Get a backlog level by ID.
    pub async fn get_backlog(
        &self,
        ctx: &TeamContext,
        id: &str,
    ) -> Result<BacklogLevelConfiguration> {
        let request = self
            .request(&routes::GET_BACKLOG)
            .team(ctx)
            .route("id", Some(id));
        self.send(request).await
    }

    /// List all backlog levels.
    pub async fn get_backlogs(&self, ctx: &TeamContext) -> Result<Vec<BacklogLevelConfiguration>> {
        let request = self.request(&routes::GET_BACKLOGS).team(ctx);
        self.send(request).await
    }

    /// Get the process configuration of a project.
    pub async fn get_process_configuration(&self, project: &str) -> Result<ProcessConfiguration> {
        let request = self
            .request(&routes::GET_PROCESS_CONFIGURATION)
            .route("project", Some(project));
        self.send(request).await
    }
}
