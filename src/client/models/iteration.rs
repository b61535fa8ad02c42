//! Iteration, capacity and days-off models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{DateRange, IdentityRef, WorkItemLink};

/// Iteration timeframe relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeFrame {
    Past,
    Current,
    Future,
}

impl TimeFrame {
    /// Query-string value accepted by the `$timeframe` filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Past => "past",
            TimeFrame::Current => "current",
            TimeFrame::Future => "future",
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "past" => Ok(TimeFrame::Past),
            "current" => Ok(TimeFrame::Current),
            "future" => Ok(TimeFrame::Future),
            other => Err(format!(
                "unknown timeframe '{}' (expected past, current or future)",
                other
            )),
        }
    }
}

/// Iteration selected for a team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettingsIteration {
    /// Iteration ID (GUID of the classification node)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Full iteration path (e.g. `Fabrikam\Release 1\Sprint 3`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<TeamIterationAttributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TeamSettingsIteration {
    /// Reference an existing iteration node by ID, for subscribing a team.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Dates and timeframe of a team iteration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamIterationAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_frame: Option<TimeFrame>,
}

/// Work items assigned to an iteration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationWorkItems {
    #[serde(default)]
    pub work_item_relations: Vec<WorkItemLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Capacity of one activity for a team member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Hours per day
    pub capacity_per_day: f64,

    /// Activity name (empty string for "unassigned")
    #[serde(default)]
    pub name: String,
}

/// A team member's capacity for an iteration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberCapacity {
    #[serde(default)]
    pub activities: Vec<Activity>,

    #[serde(default)]
    pub days_off: Vec<DateRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member: Option<IdentityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Partial update of a team member's capacity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_off: Option<Vec<DateRange>>,
}

/// Team days off for an iteration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettingsDaysOff {
    #[serde(default)]
    pub days_off: Vec<DateRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Replacement list of team days off
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettingsDaysOffPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_off: Option<Vec<DateRange>>,
}
