//! Work API data models
//!
//! Data-transfer shapes exchanged verbatim with the service. Optional fields
//! default when absent so partial payloads deserialize, and request/patch
//! types skip absent fields when serialized.

mod backlog;
mod board;
mod common;
mod iteration;
mod plan;
mod team_settings;

pub use backlog::{
    BacklogColumn, BacklogConfiguration, BacklogFields, BacklogLevelConfiguration,
    BacklogLevelWorkItems, BacklogType, BugsBehavior, CategoryConfiguration,
    ProcessConfiguration, WorkItemTypeStateInfo,
};
pub use board::{
    Board, BoardCardRuleSettings, BoardCardSettings, BoardChart, BoardChartReference,
    BoardColumn, BoardColumnType, BoardFields, BoardOptions, BoardReference, BoardRow,
    BoardSuggestedValue, BoardUserSettings, FieldReferenceName, FieldSetting, FilterClause,
    ParentChildWIMap, Rule,
};
pub use common::{
    DateRange, FieldReference, IdentityRef, WorkItemFieldReference, WorkItemLink,
    WorkItemReference, WorkItemTypeReference,
};
pub use iteration::{
    Activity, CapacityPatch, IterationWorkItems, TeamIterationAttributes, TeamMemberCapacity,
    TeamSettingsDaysOff, TeamSettingsDaysOffPatch, TeamSettingsIteration, TimeFrame,
};
pub use plan::{CreatePlan, DeliveryViewData, Plan, PlanType, UpdatePlan};
pub use team_settings::{
    DayOfWeek, TeamFieldValue, TeamFieldValues, TeamFieldValuesPatch, TeamSetting,
    TeamSettingsPatch,
};
