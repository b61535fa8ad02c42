//! Team settings operations

use crate::client::WorkClient;
use crate::client::context::TeamContext;
use crate::client::dispatch::Dispatcher;
use crate::client::models::{TeamFieldValues, TeamFieldValuesPatch, TeamSetting, TeamSettingsPatch};
use crate::client::routes;
use crate::error::Result;

impl<D: Dispatcher> WorkClient<D> {
    /// Get the area paths (team field values) owned by a team.
    pub async fn get_team_field_values(&self, ctx: &TeamContext) -> Result<TeamFieldValues> {
        let request = self.request(&routes::GET_TEAM_FIELD_VALUES).team(ctx);
        self.send(request).await
    }

    pub async fn update_team_field_values(
        &self,
        ctx: &TeamContext,
        patch: &TeamFieldValuesPatch,
    ) -> Result<TeamFieldValues> {
        let request = self
            .request(&routes::UPDATE_TEAM_FIELD_VALUES)
            .team(ctx)
            .body(patch)?;
        self.send(request).await
    }

    pub async fn get_team_settings(&self, ctx: &TeamContext) -> Result<TeamSetting> {
        let request = self.request(&routes::GET_TEAM_SETTINGS).team(ctx);
        self.send(request).await
    }

    /// Update team settings. Fields left `None` in the patch are unchanged.
    pub async fn update_team_settings(
        &self,
        ctx: &TeamContext,
        patch: &TeamSettingsPatch,
    ) -> Result<TeamSetting> {
        let request = self
            .request(&routes::UPDATE_TEAM_SETTINGS)
            .team(ctx)
            .body(patch)?;
        self.send(request).await
    }
}
