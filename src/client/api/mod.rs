//! Typed Work API operations, split by area
//!
//! Each submodule adds an `impl` block to [`WorkClient`](super::WorkClient):
//! - `backlogs` - backlog configuration, levels and process configuration
//! - `boards` - boards, columns, rows, cards, charts and board settings
//! - `capacities` - team member capacity per iteration
//! - `iterations` - team iterations, days off and iteration work items
//! - `plans` - delivery plans and timelines
//! - `team_settings` - team settings and team field values

mod backlogs;
mod boards;
mod capacities;
mod iterations;
mod plans;
mod team_settings;
