use thiserror::Error;

/// The single failure signal of a fetch cycle.
///
/// Network errors, error statuses and undecodable bodies all collapse into
/// this one value; which endpoint failed is only visible in the trace.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Failed to load analytics")]
pub struct FetchFailure;
