//! Capacity operations

use crate::client::WorkClient;
use crate::client::context::TeamContext;
use crate::client::dispatch::Dispatcher;
use crate::client::models::{CapacityPatch, TeamMemberCapacity};
use crate::client::routes;
use crate::error::Result;

impl<D: Dispatcher> WorkClient<D> {
    /// Get the capacity of every team member for an iteration.
    pub async fn get_capacities(
        &self,
        ctx: &TeamContext,
        iteration_id: &str,
    ) -> Result<Vec<TeamMemberCapacity>> {
        let request = self
            .request(&routes::GET_CAPACITIES)
            .team(ctx)
            .route("iterationId", Some(iteration_id));
        self.send(request).await
    }

    /// Get one team member's capacity for an iteration.
    pub async fn get_capacity(
        &self,
        ctx: &TeamContext,
        iteration_id: &str,
        team_member_id: &str,
    ) -> Result<TeamMemberCapacity> {
        let request = self
            .request(&routes::GET_CAPACITY)
            .team(ctx)
            .route("iterationId", Some(iteration_id))
            .route("teamMemberId", Some(team_member_id));
        self.send(request).await
    }

    /// Replace the whole team's capacity for an iteration.
    pub async fn replace_capacities(
        &self,
        ctx: &TeamContext,
        iteration_id: &str,
        capacities: &[TeamMemberCapacity],
    ) -> Result<Vec<TeamMemberCapacity>> {
        let request = self
            .request(&routes::REPLACE_CAPACITIES)
            .team(ctx)
            .route("iterationId", Some(iteration_id))
            .body(capacities)?;
        self.send(request).await
    }

    /// Update one team member's capacity.
    pub async fn update_capacity(
        &self,
        ctx: &TeamContext,
        iteration_id: &str,
        team_member_id: &str,
        patch: &CapacityPatch,
    ) -> Result<TeamMemberCapacity> {
        let request = self
            .request(&routes::UPDATE_CAPACITY)
            .team(ctx)
            .route("iterationId", Some(iteration_id))
            .route("teamMemberId", Some(team_member_id))
            .body(patch)?;
        self.send(request).await
    }
}
