//! Board operations

use std::collections::HashMap;

use crate::client::WorkClient;
use crate::client::context::TeamContext;
use crate::client::dispatch::Dispatcher;
use crate::client::models::{
    Board, BoardCardRuleSettings, BoardCardSettings, BoardChart, BoardChartReference,
    BoardColumn, BoardOptions, BoardReference, BoardRow, BoardSuggestedValue, BoardUserSettings,
    ParentChildWIMap,
};
use crate::client::request::QueryParams;
use crate::client::routes;
use crate::error::Result;

impl<D: Dispatcher> WorkClient<D> {
    // ========================================================================
    // Project-level suggestions
    // ========================================================================

    /// Get the column names in use across a project's boards.
    pub async fn get_column_suggested_values(
        &self,
        project: Option<&str>,
    ) -> Result<Vec<BoardSuggestedValue>> {
        let request = self
            .request(&routes::GET_COLUMN_SUGGESTED_VALUES)
            .route("project", project);
        self.send(request).await
    }

    /// Get the row names in use across a project's boards.
    pub async fn get_row_suggested_values(
        &self,
        project: Option<&str>,
    ) -> Result<Vec<BoardSuggestedValue>> {
        let request = self
            .request(&routes::GET_ROW_SUGGESTED_VALUES)
            .route("project", project);
        self.send(request).await
    }

    /// Get the parent items of the given work items on a child backlog.
    ///
    /// `workitem_ids` is sent comma-joined; an empty list omits the parameter.
    pub async fn get_board_mapping_parent_items(
        &self,
        ctx: &TeamContext,
        child_backlog_context_category_ref_name: &str,
        workitem_ids: Option<&[i32]>,
    ) -> Result<Vec<ParentChildWIMap>> {
        let query = QueryParams::new()
            .push(
                "childBacklogContextCategoryRefName",
                child_backlog_context_category_ref_name,
            )
            .push_list("workitemIds", workitem_ids);

        let request = self
            .request(&routes::GET_BOARD_MAPPING_PARENT_ITEMS)
            .team(ctx)
            .query(query);
        self.send(request).await
    }

    // ========================================================================
    // Boards
    // ========================================================================

    /// Get a board by backlog level name (e.g. `Stories`) or ID.
    pub async fn get_board(&self, ctx: &TeamContext, id: &str) -> Result<Board> {
        let request = self
            .request(&routes::GET_BOARD)
            .team(ctx)
            .route("id", Some(id));
        self.send(request).await
    }

    /// List a team's boards.
    pub async fn get_boards(&self, ctx: &TeamContext) -> Result<Vec<BoardReference>> {
        let request = self.request(&routes::GET_BOARDS).team(ctx);
        self.send(request).await
    }

    /// Replace board options.
    pub async fn set_board_options(
        &self,
        ctx: &TeamContext,
        id: &str,
        options: &BoardOptions,
    ) -> Result<BoardOptions> {
        let request = self
            .request(&routes::SET_BOARD_OPTIONS)
            .team(ctx)
            .route("id", Some(id))
            .body(options)?;
        self.send(request).await
    }

    /// Get the calling user's settings for a board.
    pub async fn get_board_user_settings(
        &self,
        ctx: &TeamContext,
        board: &str,
    ) -> Result<BoardUserSettings> {
        let request = self
            .request(&routes::GET_BOARD_USER_SETTINGS)
            .team(ctx)
            .route("board", Some(board));
        self.send(request).await
    }

    /// Update the calling user's settings for a board.
    pub async fn update_board_user_settings(
        &self,
        ctx: &TeamContext,
        board: &str,
        settings: &HashMap<String, String>,
    ) -> Result<BoardUserSettings> {
        let request = self
            .request(&routes::UPDATE_BOARD_USER_SETTINGS)
            .team(ctx)
            .route("board", Some(board))
            .body(settings)?;
        self.send(request).await
    }

    // ========================================================================
    // Cards
    // ========================================================================

    pub async fn get_board_card_rule_settings(
        &self,
        ctx: &TeamContext,
        board: &str,
    ) -> Result<BoardCardRuleSettings> {
        let request = self
            .request(&routes::GET_BOARD_CARD_RULE_SETTINGS)
            .team(ctx)
            .route("board", Some(board));
        self.send(request).await
    }

    pub async fn update_board_card_rule_settings(
        &self,
        ctx: &TeamContext,
        board: &str,
        settings: &BoardCardRuleSettings,
    ) -> Result<BoardCardRuleSettings> {
        let request = self
            .request(&routes::UPDATE_BOARD_CARD_RULE_SETTINGS)
            .team(ctx)
            .route("board", Some(board))
            .body(settings)?;
        self.send(request).await
    }

    pub async fn get_board_card_settings(
        &self,
        ctx: &TeamContext,
        board: &str,
    ) -> Result<BoardCardSettings> {
        let request = self
            .request(&routes::GET_BOARD_CARD_SETTINGS)
            .team(ctx)
            .route("board", Some(board));
        self.send(request).await
    }

    /// Replace the card field settings of a board.
    pub async fn update_board_card_settings(
        &self,
        ctx: &TeamContext,
        board: &str,
        settings: &BoardCardSettings,
    ) -> Result<BoardCardSettings> {
        let request = self
            .request(&routes::UPDATE_BOARD_CARD_SETTINGS)
            .team(ctx)
            .route("board", Some(board))
            .body(settings)?;
        self.send(request).await
    }

    // ========================================================================
    // Charts
    // ========================================================================

    /// Get a board chart by name (e.g. `cumulativeFlow`).
    pub async fn get_board_chart(
        &self,
        ctx: &TeamContext,
        board: &str,
        name: &str,
    ) -> Result<BoardChart> {
        let request = self
            .request(&routes::GET_BOARD_CHART)
            .team(ctx)
            .route("board", Some(board))
            .route("name", Some(name));
        self.send(request).await
    }

    pub async fn get_board_charts(
        &self,
        ctx: &TeamContext,
        board: &str,
    ) -> Result<Vec<BoardChartReference>> {
        let request = self
            .request(&routes::GET_BOARD_CHARTS)
            .team(ctx)
            .route("board", Some(board));
        self.send(request).await
    }

    pub async fn update_board_chart(
        &self,
        ctx: &TeamContext,
        board: &str,
        name: &str,
        chart: &BoardChart,
    ) -> Result<BoardChart> {
        let request = self
            .request(&routes::UPDATE_BOARD_CHART)
            .team(ctx)
            .route("board", Some(board))
            .route("name", Some(name))
            .body(chart)?;
        self.send(request).await
    }

    // ========================================================================
    // Columns & rows
    // ========================================================================

    pub async fn get_board_columns(
        &self,
        ctx: &TeamContext,
        board: &str,
    ) -> Result<Vec<BoardColumn>> {
        let request = self
            .request(&routes::GET_BOARD_COLUMNS)
            .team(ctx)
            .route("board", Some(board));
        self.send(request).await
    }

    /// Replace the columns of a board.
    pub async fn update_board_columns(
        &self,
        ctx: &TeamContext,
        board: &str,
        columns: &[BoardColumn],
    ) -> Result<Vec<BoardColumn>> {
        let request = self
            .request(&routes::UPDATE_BOARD_COLUMNS)
            .team(ctx)
            .route("board", Some(board))
            .body(columns)?;
        self.send(request).await
    }

    pub async fn get_board_rows(&self, ctx: &TeamContext, board: &str) -> Result<Vec<BoardRow>> {
        let request = self
            .request(&routes::GET_BOARD_ROWS)
            .team(ctx)
            .route("board", Some(board));
        self.send(request).await
    }

    /// Replace the rows (swimlanes) of a board.
    pub async fn update_board_rows(
        &self,
        ctx: &TeamContext,
        board: &str,
        rows: &[BoardRow],
    ) -> Result<Vec<BoardRow>> {
        let request = self
            .request(&routes::UPDATE_BOARD_ROWS)
            .team(ctx)
            .route("board", Some(board))
            .body(rows)?;
        self.send(request).await
    }
}
