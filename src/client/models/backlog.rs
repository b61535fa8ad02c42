//! Backlog and process configuration models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{WorkItemFieldReference, WorkItemLink, WorkItemTypeReference};

/// How bugs are tracked on a team's backlogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BugsBehavior {
    Off,
    AsRequirements,
    AsTasks,
}

/// Level a backlog sits at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BacklogType {
    Portfolio,
    Requirement,
    Task,
}

/// Team backlog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogConfiguration {
    /// Behavior/type field mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlog_fields: Option<BacklogFields>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bugs_behavior: Option<BugsBehavior>,

    /// Backlog ids hidden by the team
    #[serde(default)]
    pub hidden_backlogs: Vec<String>,

    #[serde(default)]
    pub is_bugs_behavior_configured: bool,

    #[serde(default)]
    pub portfolio_backlogs: Vec<BacklogLevelConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_backlog: Option<BacklogLevelConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_backlog: Option<BacklogLevelConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Work item type name to state-category mappings
    #[serde(default)]
    pub work_item_type_mapped_states: Vec<WorkItemTypeStateInfo>,
}

/// Field names backing backlog behaviors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogFields {
    /// Field type (e.g. `Order`, `Effort`) to field reference name
    #[serde(default)]
    pub type_fields: HashMap<String, String>,
}

/// State-category mapping for one work item type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemTypeStateInfo {
    /// State name to state category
    #[serde(default)]
    pub states: HashMap<String, String>,

    pub work_item_type_name: String,
}

/// One backlog level (Epics, Features, Stories...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogLevelConfiguration {
    /// Backlog ID (e.g. `Microsoft.RequirementCategory`)
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub add_panel_fields: Vec<WorkItemFieldReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default)]
    pub column_fields: Vec<BacklogColumn>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_work_item_type: Option<WorkItemTypeReference>,

    #[serde(default)]
    pub is_hidden: bool,

    #[serde(default)]
    pub rank: i32,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub backlog_type: Option<BacklogType>,

    #[serde(default)]
    pub work_item_count_limit: i32,

    #[serde(default)]
    pub work_item_types: Vec<WorkItemTypeReference>,
}

/// Column shown on a backlog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogColumn {
    pub column_field_reference: WorkItemFieldReference,

    #[serde(default)]
    pub width: i32,
}

/// Work items on a backlog level
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogLevelWorkItems {
    #[serde(default)]
    pub work_items: Vec<WorkItemLink>,
}

/// Project process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bug_work_items: Option<CategoryConfiguration>,

    #[serde(default)]
    pub portfolio_backlogs: Vec<CategoryConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_backlog: Option<CategoryConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_backlog: Option<CategoryConfiguration>,

    /// Field type to field reference
    #[serde(default)]
    pub type_fields: HashMap<String, WorkItemFieldReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Work item category as seen by the process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfiguration {
    pub name: String,

    pub reference_name: String,

    #[serde(default)]
    pub work_item_types: Vec<WorkItemTypeReference>,
}
