use reqwest::Client;
use shared::protocol::{JourneyPlanResponse, JourneyStep, PlanRequest, RouteSummary};
use tracing::{debug, warn};

pub mod error;
pub mod types;

pub use error::{CatalogError, PlanError};
pub use types::{JourneyPlan, JourneyTotals};

/// HTTP client for the remote journey-planning service.
///
/// Holds a connection-pooling [`reqwest::Client`] and the service base URL;
/// both endpoints of the service are consumed as black boxes.
pub struct PlannerClient {
    http: Client,
    base_url: String,
}

impl PlannerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the route catalog.
    ///
    /// Succeeds iff the body decodes to an array of route records; the
    /// caller replaces its catalog wholesale on success. Per-record fields
    /// may be missing, a non-array body is a decode failure.
    pub async fn fetch_routes(&self) -> Result<Vec<RouteSummary>, CatalogError> {
        let body = self
            .http
            .get(format!("{}/api/v1/routes", self.base_url))
            .send()
            .await
            .map_err(CatalogError::Transport)?
            .bytes()
            .await
            .map_err(CatalogError::Transport)?;
        let routes: Vec<RouteSummary> =
            serde_json::from_slice(&body).map_err(CatalogError::Decode)?;
        debug!(routes = routes.len(), "route catalog loaded");
        Ok(routes)
    }

    /// Requests an itinerary for `request`.
    ///
    /// The service reports failures in the response body rather than the
    /// status line, so the status code is deliberately not consulted: any
    /// JSON object carrying a `plan` array is a success, any other JSON
    /// object is a service error. The step order of a successful plan is
    /// returned exactly as received.
    pub async fn request_plan(
        &self,
        request: &PlanRequest,
    ) -> Result<Vec<JourneyStep>, PlanError> {
        let body = self
            .http
            .post(format!("{}/api/v1/journey_planner", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(PlanError::Transport)?
            .bytes()
            .await
            .map_err(PlanError::Transport)?;
        let envelope: JourneyPlanResponse =
            serde_json::from_slice(&body).map_err(PlanError::Decode)?;
        match envelope.plan {
            Some(steps) => {
                debug!(
                    route = %request.route,
                    steps = steps.len(),
                    "journey plan received"
                );
                Ok(steps)
            }
            None => {
                let detail = envelope.error.unwrap_or_else(|| "Unknown error".to_string());
                warn!(route = %request.route, %detail, "journey plan rejected by service");
                Err(PlanError::Service { detail })
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
