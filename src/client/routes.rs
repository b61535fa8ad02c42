//! Endpoint table for the Work API
//!
//! Each operation's wire contract (method, route template, API version) is
//! declared exactly once here. Route templates and version strings address a
//! fixed external URL space and must match the service byte for byte.

use super::request::HttpMethod;

/// Resource area identifier of the Work API.
pub const RESOURCE_AREA_ID: &str = "1d4f49f9-02b9-4e26-b826-2cdb6195f2a9";

/// API version pinned by every Work operation.
pub const DEFAULT_API_VERSION: &str = "5.0-preview.1";

/// Static description of one API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    pub route_template: &'static str,
    pub api_version: &'static str,
}

impl Endpoint {
    const fn new(name: &'static str, method: HttpMethod, route_template: &'static str) -> Self {
        Self {
            name,
            method,
            route_template,
            api_version: DEFAULT_API_VERSION,
        }
    }

    const fn get(name: &'static str, route_template: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, route_template)
    }
}

// ============================================================================
// Route templates
// ============================================================================

const BACKLOG_CONFIGURATION: &str = "{project}/{team}/_apis/work/backlogconfiguration";
const BACKLOG_WORK_ITEMS: &str = "{project}/{team}/_apis/work/backlogs/{backlogId}/workItems";
const BACKLOGS: &str = "{project}/{team}/_apis/work/backlogs/{id}";
const BOARD_COLUMN_SUGGESTIONS: &str = "{project}/_apis/work/boardcolumns";
const BOARD_PARENTS: &str = "{project}/{team}/_apis/work/boards/boardparents";
const BOARD_ROW_SUGGESTIONS: &str = "{project}/_apis/work/boardrows";
const BOARDS: &str = "{project}/{team}/_apis/work/boards/{id}";
const BOARD_USER_SETTINGS: &str = "{project}/{team}/_apis/work/boards/{board}/boardusersettings";
const CAPACITIES: &str =
    "{project}/{team}/_apis/work/teamsettings/iterations/{iterationId}/capacities/{teamMemberId}";
const CARD_RULE_SETTINGS: &str = "{project}/{team}/_apis/work/boards/{board}/cardrulesettings";
const CARD_SETTINGS: &str = "{project}/{team}/_apis/work/boards/{board}/cardsettings";
const CHARTS: &str = "{project}/{team}/_apis/work/boards/{board}/charts/{name}";
const COLUMNS: &str = "{project}/{team}/_apis/work/boards/{board}/columns/{id}";
const DELIVERY_TIMELINE: &str = "{project}/_apis/work/plans/{id}/deliverytimeline";
const ITERATIONS: &str = "{project}/{team}/_apis/work/teamsettings/iterations/{id}";
const PLANS: &str = "{project}/_apis/work/plans/{id}";
const PROCESS_CONFIGURATION: &str = "{project}/_apis/work/processconfiguration";
const ROWS: &str = "{project}/{team}/_apis/work/boards/{board}/rows/{id}";
const TEAM_DAYS_OFF: &str =
    "{project}/{team}/_apis/work/teamsettings/iterations/{iterationId}/teamdaysoff";
const TEAM_FIELD_VALUES: &str = "{project}/{team}/_apis/work/teamsettings/teamfieldvalues";
const TEAM_SETTINGS: &str = "{project}/{team}/_apis/work/teamsettings";
const ITERATION_WORK_ITEMS: &str =
    "{project}/{team}/_apis/work/teamsettings/iterations/{iterationId}/workitems";

// ============================================================================
// Backlogs
// ============================================================================

pub const GET_BACKLOG_CONFIGURATIONS: Endpoint =
    Endpoint::get("getBacklogConfigurations", BACKLOG_CONFIGURATION);
pub const GET_BACKLOG_LEVEL_WORK_ITEMS: Endpoint =
    Endpoint::get("getBacklogLevelWorkItems", BACKLOG_WORK_ITEMS);
pub const GET_BACKLOG: Endpoint = Endpoint::get("getBacklog", BACKLOGS);
pub const GET_BACKLOGS: Endpoint = Endpoint::get("getBacklogs", BACKLOGS);

// ============================================================================
// Boards
// ============================================================================

pub const GET_COLUMN_SUGGESTED_VALUES: Endpoint =
    Endpoint::get("getColumnSuggestedValues", BOARD_COLUMN_SUGGESTIONS);
pub const GET_BOARD_MAPPING_PARENT_ITEMS: Endpoint =
    Endpoint::get("getBoardMappingParentItems", BOARD_PARENTS);
pub const GET_ROW_SUGGESTED_VALUES: Endpoint =
    Endpoint::get("getRowSuggestedValues", BOARD_ROW_SUGGESTIONS);
pub const GET_BOARD: Endpoint = Endpoint::get("getBoard", BOARDS);
pub const GET_BOARDS: Endpoint = Endpoint::get("getBoards", BOARDS);
pub const SET_BOARD_OPTIONS: Endpoint = Endpoint::new("setBoardOptions", HttpMethod::Put, BOARDS);
pub const GET_BOARD_USER_SETTINGS: Endpoint =
    Endpoint::get("getBoardUserSettings", BOARD_USER_SETTINGS);
pub const UPDATE_BOARD_USER_SETTINGS: Endpoint = Endpoint::new(
    "updateBoardUserSettings",
    HttpMethod::Patch,
    BOARD_USER_SETTINGS,
);
pub const GET_BOARD_CARD_RULE_SETTINGS: Endpoint =
    Endpoint::get("getBoardCardRuleSettings", CARD_RULE_SETTINGS);
pub const UPDATE_BOARD_CARD_RULE_SETTINGS: Endpoint = Endpoint::new(
    "updateBoardCardRuleSettings",
    HttpMethod::Patch,
    CARD_RULE_SETTINGS,
);
pub const GET_BOARD_CARD_SETTINGS: Endpoint = Endpoint::get("getBoardCardSettings", CARD_SETTINGS);
pub const UPDATE_BOARD_CARD_SETTINGS: Endpoint =
    Endpoint::new("updateBoardCardSettings", HttpMethod::Put, CARD_SETTINGS);
pub const GET_BOARD_CHART: Endpoint = Endpoint::get("getBoardChart", CHARTS);
pub const GET_BOARD_CHARTS: Endpoint = Endpoint::get("getBoardCharts", CHARTS);
pub const UPDATE_BOARD_CHART: Endpoint =
    Endpoint::new("updateBoardChart", HttpMethod::Patch, CHARTS);
pub const GET_BOARD_COLUMNS: Endpoint = Endpoint::get("getBoardColumns", COLUMNS);
pub const UPDATE_BOARD_COLUMNS: Endpoint =
    Endpoint::new("updateBoardColumns", HttpMethod::Put, COLUMNS);
pub const GET_BOARD_ROWS: Endpoint = Endpoint::get("getBoardRows", ROWS);
pub const UPDATE_BOARD_ROWS: Endpoint = Endpoint::new("updateBoardRows", HttpMethod::Put, ROWS);

// ============================================================================
// Capacities
// ============================================================================

pub const GET_CAPACITIES: Endpoint = Endpoint::get("getCapacities", CAPACITIES);
pub const GET_CAPACITY: Endpoint = Endpoint::get("getCapacity", CAPACITIES);
pub const REPLACE_CAPACITIES: Endpoint =
    Endpoint::new("replaceCapacities", HttpMethod::Put, CAPACITIES);
pub const UPDATE_CAPACITY: Endpoint =
    Endpoint::new("updateCapacity", HttpMethod::Patch, CAPACITIES);

// ============================================================================
// Iterations
// ============================================================================

pub const DELETE_TEAM_ITERATION: Endpoint =
    Endpoint::new("deleteTeamIteration", HttpMethod::Delete, ITERATIONS);
pub const GET_TEAM_ITERATION: Endpoint = Endpoint::get("getTeamIteration", ITERATIONS);
pub const GET_TEAM_ITERATIONS: Endpoint = Endpoint::get("getTeamIterations", ITERATIONS);
pub const POST_TEAM_ITERATION: Endpoint =
    Endpoint::new("postTeamIteration", HttpMethod::Post, ITERATIONS);
pub const GET_TEAM_DAYS_OFF: Endpoint = Endpoint::get("getTeamDaysOff", TEAM_DAYS_OFF);
pub const UPDATE_TEAM_DAYS_OFF: Endpoint =
    Endpoint::new("updateTeamDaysOff", HttpMethod::Patch, TEAM_DAYS_OFF);
pub const GET_ITERATION_WORK_ITEMS: Endpoint =
    Endpoint::get("getIterationWorkItems", ITERATION_WORK_ITEMS);

// ============================================================================
// Plans & process
// ============================================================================

pub const GET_DELIVERY_TIMELINE_DATA: Endpoint =
    Endpoint::get("getDeliveryTimelineData", DELIVERY_TIMELINE);
pub const CREATE_PLAN: Endpoint = Endpoint::new("createPlan", HttpMethod::Post, PLANS);
pub const DELETE_PLAN: Endpoint = Endpoint::new("deletePlan", HttpMethod::Delete, PLANS);
pub const GET_PLAN: Endpoint = Endpoint::get("getPlan", PLANS);
pub const GET_PLANS: Endpoint = Endpoint::get("getPlans", PLANS);
pub const UPDATE_PLAN: Endpoint = Endpoint::new("updatePlan", HttpMethod::Put, PLANS);
pub const GET_PROCESS_CONFIGURATION: Endpoint =
    Endpoint::get("getProcessConfiguration", PROCESS_CONFIGURATION);

// ============================================================================
// Team settings
// ============================================================================

pub const GET_TEAM_FIELD_VALUES: Endpoint = Endpoint::get("getTeamFieldValues", TEAM_FIELD_VALUES);
pub const UPDATE_TEAM_FIELD_VALUES: Endpoint =
    Endpoint::new("updateTeamFieldValues", HttpMethod::Patch, TEAM_FIELD_VALUES);
pub const GET_TEAM_SETTINGS: Endpoint = Endpoint::get("getTeamSettings", TEAM_SETTINGS);
pub const UPDATE_TEAM_SETTINGS: Endpoint =
    Endpoint::new("updateTeamSettings", HttpMethod::Patch, TEAM_SETTINGS);

/// Every Work API operation.
pub static ALL: [Endpoint; 45] = [
    GET_BACKLOG_CONFIGURATIONS,
    GET_BACKLOG_LEVEL_WORK_ITEMS,
    GET_BACKLOG,
    GET_BACKLOGS,
    GET_COLUMN_SUGGESTED_VALUES,
    GET_BOARD_MAPPING_PARENT_ITEMS,
    GET_ROW_SUGGESTED_VALUES,
    GET_BOARD,
    GET_BOARDS,
    SET_BOARD_OPTIONS,
    GET_BOARD_USER_SETTINGS,
    UPDATE_BOARD_USER_SETTINGS,
    GET_CAPACITIES,
    GET_CAPACITY,
    REPLACE_CAPACITIES,
    UPDATE_CAPACITY,
    GET_BOARD_CARD_RULE_SETTINGS,
    UPDATE_BOARD_CARD_RULE_SETTINGS,
    GET_BOARD_CARD_SETTINGS,
    UPDATE_BOARD_CARD_SETTINGS,
    GET_BOARD_CHART,
    GET_BOARD_CHARTS,
    UPDATE_BOARD_CHART,
    GET_BOARD_COLUMNS,
    UPDATE_BOARD_COLUMNS,
    GET_DELIVERY_TIMELINE_DATA,
    DELETE_TEAM_ITERATION,
    GET_TEAM_ITERATION,
    GET_TEAM_ITERATIONS,
    POST_TEAM_ITERATION,
    CREATE_PLAN,
    DELETE_PLAN,
    GET_PLAN,
    GET_PLANS,
    UPDATE_PLAN,
    GET_PROCESS_CONFIGURATION,
    GET_BOARD_ROWS,
    UPDATE_BOARD_ROWS,
    GET_TEAM_DAYS_OFF,
    UPDATE_TEAM_DAYS_OFF,
    GET_TEAM_FIELD_VALUES,
    UPDATE_TEAM_FIELD_VALUES,
    GET_TEAM_SETTINGS,
    UPDATE_TEAM_SETTINGS,
    GET_ITERATION_WORK_ITEMS,
];

/// Look up an endpoint by operation name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|e| e.name == name)
}
