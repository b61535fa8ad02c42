//! Delivery plan models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::IdentityRef;

/// Kind of plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanType {
    DeliveryTimelineView,
}

/// Delivery plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Plan ID (GUID)
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<PlanType>,

    /// Revision, required for optimistic concurrency on update
    #[serde(default)]
    pub revision: i32,

    /// Plan-type specific properties, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_identity: Option<IdentityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by_identity: Option<IdentityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,

    /// Caller's permissions on the plan. The service sends flag names
    /// (`"view, edit"`), older servers the numeric bit set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_permissions: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Payload to create a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlan {
    pub name: String,

    #[serde(rename = "type")]
    pub plan_type: PlanType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

/// Payload to update a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlan {
    pub name: String,

    #[serde(rename = "type")]
    pub plan_type: PlanType,

    /// Revision of the plan being replaced
    pub revision: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

/// Delivery timeline data for a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryViewData {
    /// Plan ID
    pub id: String,

    #[serde(default)]
    pub revision: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    /// Child work item id -> parent work item id
    #[serde(default)]
    pub child_id_to_parent_id_map: HashMap<String, i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria_status: Option<serde_json::Value>,

    /// Per-team timeline rows, passed through untouched
    #[serde(default)]
    pub teams: Vec<serde_json::Value>,
}
