use serde::{Deserialize, Serialize};

use crate::domain::RouteId;

/// One entry of the route catalog as served by `GET /api/v1/routes`.
///
/// The catalog endpoint tolerates partially-shaped records; both fields
/// default when absent. The overall body must still be an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    #[serde(default)]
    pub id: RouteId,
    #[serde(default)]
    pub name: String,
}

/// Payload of `POST /api/v1/journey_planner`.
///
/// Built fresh on every submission attempt; `route` carries the display
/// name of the selected catalog entry, `start_time` an `HH:MM` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub route: String,
    pub start_location: String,
    pub start_time: String,
}

/// One leg of a computed itinerary.
///
/// The time strings are server-formatted and passed through verbatim.
/// `time_used` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStep {
    pub start_location: String,
    pub stop_location: String,
    pub start_time: String,
    pub stop_time: String,
    pub km: f64,
    pub time_used: f64,
}

/// Response envelope of the journey planner endpoint.
///
/// A usable response carries `plan`; anything else is an error envelope,
/// with `error` optionally naming the cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyPlanResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<JourneyStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
