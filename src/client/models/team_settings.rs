//! Team settings and team field value models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::backlog::BugsBehavior;
use super::common::FieldReference;
use super::iteration::TeamSettingsIteration;

/// Day of the week, as used for working days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Team settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlog_iteration: Option<TeamSettingsIteration>,

    /// Backlog category reference name -> visible
    #[serde(default)]
    pub backlog_visibilities: HashMap<String, bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bugs_behavior: Option<BugsBehavior>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_iteration: Option<TeamSettingsIteration>,

    /// Macro such as `@currentIteration`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_iteration_macro: Option<String>,

    #[serde(default)]
    pub working_days: Vec<DayOfWeek>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Partial update of team settings; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettingsPatch {
    /// Iteration ID of the backlog iteration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlog_iteration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlog_visibilities: Option<HashMap<String, bool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bugs_behavior: Option<BugsBehavior>,

    /// Iteration ID of the default iteration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_iteration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_iteration_macro: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days: Option<Vec<DayOfWeek>>,
}

/// Area paths (or custom team field values) owned by a team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFieldValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldReference>,

    #[serde(default)]
    pub values: Vec<TeamFieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One team field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFieldValue {
    pub value: String,

    #[serde(default)]
    pub include_children: bool,
}

/// Replacement of a team's field values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFieldValuesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<TeamFieldValue>>,
}
