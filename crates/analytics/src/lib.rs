//! # Shop Analytics Dashboard
//!
//! This crate turns the shop's five admin analytics endpoints into everything a
//! dashboard view needs.
//!
//! ## Architectural Principles
//!
//! - **All or nothing:** the orchestrator joins the five reports into one
//!   `AnalyticsAggregate` or reports a single `FetchFailure`. A view never sees
//!   a partially loaded dashboard.
//! - **Pure mapping:** the mapper and summary functions are stateless. They take
//!   a report and produce chart input or display text, and can be re-run on
//!   every render.
//!
//! ## Public API
//!
//! - `fetch_aggregate` / `Dashboard`: the fetch orchestrator and its state machine.
//! - `ChartSet` and the `mapper` functions: chart-ready series and distributions.
//! - `DashboardSummary`: metric cards, the product tables and detail panels.

// Declare the modules that constitute this crate.
pub mod charts;
pub mod error;
pub mod format;
pub mod mapper;
pub mod orchestrator;
pub mod palette;
pub mod summary;

// Re-export the key components to create a clean, public-facing API.
pub use charts::{Category, ChartKind, ChartSet, Distribution, Point, Series, SeriesStyle};
pub use error::FetchFailure;
pub use orchestrator::{Dashboard, DashboardState, fetch_aggregate};
pub use summary::{DashboardSummary, LeastProductRow, MetricCard, StatLine, TopProductRow};
