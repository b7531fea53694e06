use thiserror::Error;

/// Failure while loading the route catalog.
///
/// The UI surfaces every variant as the same fixed message; the source
/// detail is only for the log.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("route catalog request failed")]
    Transport(#[source] reqwest::Error),
    #[error("route catalog body was not a route list")]
    Decode(#[source] serde_json::Error),
    #[error("planner worker runtime unavailable")]
    Runtime(#[source] std::io::Error),
}

/// Failure of a journey plan submission.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The service answered with an error envelope instead of a plan.
    /// `detail` is the server-supplied text, or "Unknown error" when the
    /// envelope named no cause.
    #[error("journey plan rejected: {detail}")]
    Service { detail: String },
    #[error("journey plan request failed")]
    Transport(#[source] reqwest::Error),
    #[error("journey plan body was not a plan envelope")]
    Decode(#[source] serde_json::Error),
}
