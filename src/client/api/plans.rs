//! Delivery plan operations
//!
//! Plans are scoped to a project only; they never take a team.

use chrono::{DateTime, Utc};

use crate::client::WorkClient;
use crate::client::dispatch::Dispatcher;
use crate::client::models::{CreatePlan, DeliveryViewData, Plan, UpdatePlan};
use crate::client::request::QueryParams;
use crate::client::routes;
use crate::error::Result;

impl<D: Dispatcher> WorkClient<D> {
    /// Get delivery timeline data for a plan.
    ///
    /// `revision` pins the plan revision the caller last saw; the dates bound
    /// the returned window.
    pub async fn get_delivery_timeline_data(
        &self,
        project: &str,
        id: &str,
        revision: Option<i32>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<DeliveryViewData> {
        let query = QueryParams::new()
            .push_opt("revision", revision)
            .push_date("startDate", start_date)
            .push_date("endDate", end_date);
        let request = self
            .request(&routes::GET_DELIVERY_TIMELINE_DATA)
            .route("project", Some(project))
            .route("id", Some(id))
            .query(query);
        self.send(request).await
    }

    pub async fn create_plan(&self, project: &str, plan: &CreatePlan) -> Result<Plan> {
        let request = self
            .request(&routes::CREATE_PLAN)
            .route("project", Some(project))
            .body(plan)?;
        self.send(request).await
    }

    pub async fn delete_plan(&self, project: &str, id: &str) -> Result<()> {
        let request = self
            .request(&routes::DELETE_PLAN)
            .route("project", Some(project))
            .route("id", Some(id));
        self.send_empty(request).await
    }

    pub async fn get_plan(&self, project: &str, id: &str) -> Result<Plan> {
        let request = self
            .request(&routes::GET_PLAN)
            .route("project", Some(project))
            .route("id", Some(id));
        self.send(request).await
    }

    /// List the plans of a project.
    pub async fn get_plans(&self, project: &str) -> Result<Vec<Plan>> {
        let request = self
            .request(&routes::GET_PLANS)
            .route("project", Some(project));
        self.send(request).await
    }

    /// Replace a plan. `plan.revision` must match the stored revision.
    pub async fn update_plan(&self, project: &str, id: &str, plan: &UpdatePlan) -> Result<Plan> {
        let request = self
            .request(&routes::UPDATE_PLAN)
            .route("project", Some(project))
            .route("id", Some(id))
            .body(plan)?;
        self.send(request).await
    }
}
