//! Board models: boards, columns, rows, cards and charts

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Board options keyed by option name (e.g. `statusBadgeIsPublic`)
pub type BoardOptions = HashMap<String, String>;

/// Card field settings: a list of field name/value bags per work item type
pub type FieldSetting = HashMap<String, String>;

/// Lightweight board reference returned by list calls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardReference {
    /// Board ID
    #[serde(default)]
    pub id: String,

    /// Board name (the backlog level name, e.g. `Stories`)
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Full board definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Board ID
    pub id: String,

    /// Board name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Column name -> work item type -> allowed states
    #[serde(default)]
    pub allowed_mappings: HashMap<String, HashMap<String, Vec<String>>>,

    #[serde(default)]
    pub can_edit: bool,

    #[serde(default)]
    pub columns: Vec<BoardColumn>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BoardFields>,

    #[serde(default)]
    pub is_valid: bool,

    #[serde(default)]
    pub revision: i32,

    #[serde(default)]
    pub rows: Vec<BoardRow>,
}

/// Fields the board uses to track column, row and done state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_field: Option<FieldReferenceName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_field: Option<FieldReferenceName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_field: Option<FieldReferenceName>,
}

/// Field addressed by reference name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReferenceName {
    pub reference_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Kind of board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardColumnType {
    Incoming,
    InProgress,
    Outgoing,
}

/// Board column
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    /// Column ID (absent when creating a column)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<BoardColumnType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_split: bool,

    /// WIP limit (0 = none)
    #[serde(default)]
    pub item_limit: i32,

    /// Work item type -> state
    #[serde(default)]
    pub state_mappings: HashMap<String, String>,
}

/// Board swimlane
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRow {
    /// Row ID (absent when creating a row)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Row name (absent for the default lane)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Suggested column or row name for a project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSuggestedValue {
    pub name: String,
}

/// Per-user board settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardUserSettings {
    #[serde(default)]
    pub auto_refresh_state: bool,
}

/// Parent work item and the board children mapped under it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentChildWIMap {
    pub id: i32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub child_work_item_ids: Vec<i32>,
}

/// Card rule settings (fill and text-style rules)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCardRuleSettings {
    /// Rule type (`fill`, `tagStyle`) -> rules
    #[serde(default)]
    pub rules: HashMap<String, Vec<Rule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One card styling rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub name: String,

    #[serde(default)]
    pub clauses: Vec<FilterClause>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Serialized as the string `"true"` / `"false"` by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<String>,

    /// Style settings (background-color, title-color...)
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

/// Single condition of a card rule filter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterClause {
    #[serde(default)]
    pub field_name: String,

    #[serde(default)]
    pub index: i32,

    #[serde(default)]
    pub logical_operator: String,

    #[serde(default)]
    pub operator: String,

    #[serde(default)]
    pub value: String,
}

/// Card field settings per work item type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCardSettings {
    #[serde(default)]
    pub cards: HashMap<String, Vec<FieldSetting>>,
}

/// Board chart reference returned by list calls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardChartReference {
    /// Chart name (e.g. `cumulativeFlow`)
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Board chart with its settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardChart {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Chart-specific settings, passed through untouched
    #[serde(default)]
    pub settings: HashMap<String, serde_json::Value>,
}
