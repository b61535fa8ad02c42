//! Typed client for the Work REST API (backlogs, boards, iterations,
//! capacities, delivery plans and team settings).
//!
//! Every operation is a method on [`client::WorkClient`], which turns its
//! arguments into a [`client::RequestDescriptor`] and hands it to a
//! [`client::Dispatcher`]. [`client::HttpDispatcher`] is the reqwest-backed
//! dispatcher used by the `workrest` binary.
//!
//! ```no_run
//! use workrest::client::{Credentials, HttpDispatcher, TeamContext, WorkClient};
//! use workrest::client::models::TimeFrame;
//!
//! # async fn run() -> workrest::error::Result<()> {
//! let dispatcher = HttpDispatcher::new(
//!     "https://dev.azure.com/fabrikam",
//!     Credentials::Pat("my-pat".to_string()),
//!     std::time::Duration::from_secs(30),
//! )?;
//! let client = WorkClient::new(dispatcher);
//! let ctx = TeamContext::new("Fabrikam-Fiber", "Web");
//! let current = client.get_team_iterations(&ctx, Some(TimeFrame::Current)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{Dispatcher, TeamContext, WorkClient};
pub use error::{Error, Result};
