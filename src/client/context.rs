//! Team context addressing

use serde::{Deserialize, Serialize};

/// Identifies the project and team an operation is scoped to.
///
/// Each half can be given as a human-readable name, an opaque identifier, or
/// both. The identifier wins when both are present. Nothing is validated here:
/// an unresolved half simply drops its route segment and the server rejects
/// the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamContext {
    /// Project name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Project identifier (GUID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Team name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// Team identifier (GUID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl TeamContext {
    /// Build a context from project and team names.
    pub fn new(project: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            team: Some(team.into()),
            ..Self::default()
        }
    }

    /// Build a context from project and team identifiers.
    pub fn from_ids(project_id: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            team_id: Some(team_id.into()),
            ..Self::default()
        }
    }

    /// Set the project identifier.
    pub fn project_id(mut self, id: impl Into<String>) -> Self {
        self.project_id = Some(id.into());
        self
    }

    /// Set the team identifier.
    pub fn team_id(mut self, id: impl Into<String>) -> Self {
        self.team_id = Some(id.into());
        self
    }

    /// Route value for `{project}`.
    pub fn project_route_value(&self) -> Option<&str> {
        prefer(self.project_id.as_deref(), self.project.as_deref())
    }

    /// Route value for `{team}`.
    pub fn team_route_value(&self) -> Option<&str> {
        prefer(self.team_id.as_deref(), self.team.as_deref())
    }

    /// Resolve both halves as `(project, team)`.
    pub fn resolve(&self) -> (Option<&str>, Option<&str>) {
        (self.project_route_value(), self.team_route_value())
    }
}

// An empty identifier counts as absent.
fn prefer<'a>(id: Option<&'a str>, name: Option<&'a str>) -> Option<&'a str> {
    id.filter(|v| !v.is_empty())
        .or_else(|| name.filter(|v| !v.is_empty()))
}
