//! Planner screen state and the pure reducer driving it.
//!
//! Every state transition of the screen lives in [`reduce`]: the catalog
//! load outcome, submission validation, and the two submission outcomes.
//! The function performs no I/O and touches no widgets, so the whole
//! lifecycle is unit-testable below.

use client_core::{CatalogError, JourneyPlan, PlanError};
use shared::protocol::{JourneyStep, PlanRequest, RouteSummary};

/// Inline message when a required form field is empty.
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
/// Inline message when the route catalog cannot be loaded.
pub const MSG_ROUTES_LOAD_FAILED: &str = "Failed to load routes";
/// Prefix for service-reported plan failures.
pub const MSG_PLAN_ERROR_PREFIX: &str = "Journey plan error: ";
/// Inline message for transport-level plan failures.
pub const MSG_PLAN_REQUEST_FAILED: &str =
    "An error occurred while generating the journey plan.";

/// Events fed through [`reduce`]. `CatalogLoaded`, `SubmitSucceeded` and
/// `SubmitFailed` arrive from the worker; `SubmitRequested` comes from the
/// submit affordance itself.
pub enum PlannerEvent {
    CatalogLoaded(Result<Vec<RouteSummary>, CatalogError>),
    SubmitRequested,
    SubmitSucceeded(Vec<JourneyStep>),
    SubmitFailed(PlanError),
}

/// Side effect requested by a transition, executed by the caller.
#[derive(Debug, PartialEq)]
pub enum Effect {
    SubmitPlan(PlanRequest),
}

/// Single-owner state record behind the planner screen. Mutated only by
/// [`reduce`].
pub struct PlannerState {
    pub routes: Vec<RouteSummary>,
    /// True from startup until the catalog fetch resolves either way.
    pub routes_loading: bool,
    pub routes_loaded: bool,

    pub selected_route: String,
    pub start_location: String,
    pub start_time: String,

    /// Last successfully received plan. Kept visible across failed
    /// resubmissions; replaced wholesale on the next success.
    pub plan: Option<JourneyPlan>,
    /// Whether `plan` is the result of the latest submission, as opposed to
    /// one carried over past a failed attempt.
    pub plan_current: bool,
    pub in_flight: bool,

    pub error: Option<String>,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            routes_loading: true,
            routes_loaded: false,
            selected_route: String::new(),
            start_location: String::new(),
            start_time: String::new(),
            plan: None,
            plan_current: false,
            in_flight: false,
            error: None,
        }
    }
}

impl PlannerState {
    fn has_empty_field(&self) -> bool {
        self.selected_route.is_empty()
            || self.start_location.is_empty()
            || self.start_time.is_empty()
    }
}

/// Applies one event to the state, returning the effect the transition
/// requests, if any.
pub fn reduce(state: &mut PlannerState, event: PlannerEvent) -> Option<Effect> {
    match event {
        PlannerEvent::CatalogLoaded(result) => {
            state.routes_loading = false;
            state.routes_loaded = true;
            match result {
                Ok(routes) => state.routes = routes,
                Err(_) => {
                    state.routes.clear();
                    state.error = Some(MSG_ROUTES_LOAD_FAILED.to_string());
                }
            }
            None
        }
        PlannerEvent::SubmitRequested => {
            if state.in_flight {
                // The affordance is disabled while a request is
                // outstanding; an event that slips through is a no-op.
                return None;
            }
            if state.has_empty_field() {
                state.error = Some(MSG_FILL_ALL_FIELDS.to_string());
                return None;
            }
            state.error = None;
            state.plan_current = false;
            state.in_flight = true;
            Some(Effect::SubmitPlan(PlanRequest {
                route: state.selected_route.clone(),
                start_location: state.start_location.clone(),
                start_time: state.start_time.clone(),
            }))
        }
        PlannerEvent::SubmitSucceeded(steps) => {
            state.in_flight = false;
            state.plan = Some(JourneyPlan::from_steps(steps));
            state.plan_current = true;
            None
        }
        PlannerEvent::SubmitFailed(err) => {
            state.in_flight = false;
            state.error = Some(match err {
                PlanError::Service { detail } => format!("{MSG_PLAN_ERROR_PREFIX}{detail}"),
                PlanError::Transport(_) | PlanError::Decode(_) => {
                    MSG_PLAN_REQUEST_FAILED.to_string()
                }
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::RouteId;

    fn route(name: &str) -> RouteSummary {
        RouteSummary {
            id: RouteId(1),
            name: name.to_string(),
        }
    }

    fn step(km: f64, time_used: f64) -> JourneyStep {
        JourneyStep {
            start_location: "Depot".to_string(),
            stop_location: "Mall".to_string(),
            start_time: "08:00".to_string(),
            stop_time: "08:30".to_string(),
            km,
            time_used,
        }
    }

    fn decode_failure() -> PlanError {
        PlanError::Decode(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    /// State after a loaded catalog with every form field filled.
    fn ready_state() -> PlannerState {
        let mut state = PlannerState::default();
        reduce(
            &mut state,
            PlannerEvent::CatalogLoaded(Ok(vec![route("Route 7")])),
        );
        state.selected_route = "Route 7".to_string();
        state.start_location = "Depot".to_string();
        state.start_time = "08:00".to_string();
        state
    }

    /// Drives a full successful submission through the reducer.
    fn state_with_plan() -> PlannerState {
        let mut state = ready_state();
        reduce(&mut state, PlannerEvent::SubmitRequested).expect("effect");
        reduce(
            &mut state,
            PlannerEvent::SubmitSucceeded(vec![step(12.5, 30.0)]),
        );
        state
    }

    #[test]
    fn catalog_success_populates_routes_and_clears_loading() {
        let mut state = PlannerState::default();
        assert!(state.routes_loading);

        let effect = reduce(
            &mut state,
            PlannerEvent::CatalogLoaded(Ok(vec![route("Route 7")])),
        );

        assert!(effect.is_none());
        assert!(!state.routes_loading);
        assert!(state.routes_loaded);
        assert_eq!(state.routes.len(), 1);
        assert_eq!(state.routes[0].name, "Route 7");
        assert!(state.error.is_none());
    }

    #[test]
    fn catalog_failure_empties_catalog_and_reports() {
        let mut state = PlannerState::default();
        let failure =
            CatalogError::Decode(serde_json::from_str::<Vec<RouteSummary>>("{}").unwrap_err());

        reduce(&mut state, PlannerEvent::CatalogLoaded(Err(failure)));

        assert!(state.routes.is_empty());
        assert!(!state.routes_loading);
        assert!(state.routes_loaded);
        assert_eq!(state.error.as_deref(), Some(MSG_ROUTES_LOAD_FAILED));
    }

    #[test]
    fn submit_with_missing_field_is_local_and_preserves_results() {
        let mut state = state_with_plan();
        state.start_time.clear();

        let effect = reduce(&mut state, PlannerEvent::SubmitRequested);

        assert!(effect.is_none());
        assert_eq!(state.error.as_deref(), Some(MSG_FILL_ALL_FIELDS));
        assert!(!state.in_flight);
        assert!(state.plan_current);
        assert!(state.plan.as_ref().expect("plan kept").is_displayable());
    }

    #[test]
    fn valid_submit_emits_one_request_and_enters_flight() {
        let mut state = ready_state();
        state.error = Some("stale message".to_string());

        let effect = reduce(&mut state, PlannerEvent::SubmitRequested);

        assert_eq!(
            effect,
            Some(Effect::SubmitPlan(PlanRequest {
                route: "Route 7".to_string(),
                start_location: "Depot".to_string(),
                start_time: "08:00".to_string(),
            }))
        );
        assert!(state.error.is_none());
        assert!(state.in_flight);
        assert!(!state.plan_current);
    }

    #[test]
    fn submit_while_in_flight_is_a_no_op() {
        let mut state = ready_state();
        reduce(&mut state, PlannerEvent::SubmitRequested).expect("effect");

        let effect = reduce(&mut state, PlannerEvent::SubmitRequested);

        assert!(effect.is_none());
        assert!(state.in_flight);
        assert!(state.error.is_none());
    }

    #[test]
    fn success_replaces_plan_and_recomputes_totals() {
        let state = state_with_plan();

        let plan = state.plan.as_ref().expect("plan");
        assert!(plan.is_displayable());
        assert_eq!(plan.steps().len(), 1);
        assert_eq!(plan.totals().distance_km, 12.5);
        assert_eq!(plan.totals().time_hours, 1);
        assert!(state.plan_current);
        assert!(!state.in_flight);
    }

    #[test]
    fn second_success_replaces_plan_wholesale() {
        let mut state = state_with_plan();
        reduce(&mut state, PlannerEvent::SubmitRequested).expect("effect");
        reduce(
            &mut state,
            PlannerEvent::SubmitSucceeded(vec![step(1.0, 10.0), step(2.0, 20.0)]),
        );

        let plan = state.plan.as_ref().expect("plan");
        assert_eq!(plan.steps().len(), 2);
        assert_eq!(plan.totals().distance_km, 3.0);
        assert_eq!(plan.totals().time_hours, 1);
    }

    #[test]
    fn service_failure_formats_detail_and_keeps_prior_plan() {
        let mut state = state_with_plan();
        let prior = state.plan.clone();
        reduce(&mut state, PlannerEvent::SubmitRequested).expect("effect");

        reduce(
            &mut state,
            PlannerEvent::SubmitFailed(PlanError::Service {
                detail: "no such route".to_string(),
            }),
        );

        assert_eq!(
            state.error.as_deref(),
            Some("Journey plan error: no such route")
        );
        assert_eq!(state.plan, prior);
        assert!(!state.plan_current);
        assert!(!state.in_flight);
    }

    #[test]
    fn transport_failure_uses_generic_message_and_keeps_prior_plan() {
        let mut state = state_with_plan();
        let prior = state.plan.clone();
        reduce(&mut state, PlannerEvent::SubmitRequested).expect("effect");

        reduce(&mut state, PlannerEvent::SubmitFailed(decode_failure()));

        assert_eq!(state.error.as_deref(), Some(MSG_PLAN_REQUEST_FAILED));
        assert_eq!(state.plan, prior);
        assert!(state.plan.as_ref().expect("plan kept").is_displayable());
        assert!(!state.in_flight);
    }

    #[test]
    fn resubmission_after_success_issues_fresh_request() {
        let mut state = state_with_plan();

        let effect = reduce(&mut state, PlannerEvent::SubmitRequested);

        assert_eq!(
            effect,
            Some(Effect::SubmitPlan(PlanRequest {
                route: "Route 7".to_string(),
                start_location: "Depot".to_string(),
                start_time: "08:00".to_string(),
            }))
        );
        assert!(state.in_flight);
        assert!(!state.plan_current);
    }

    #[test]
    fn empty_plan_replaces_prior_but_is_not_displayable() {
        let mut state = state_with_plan();
        reduce(&mut state, PlannerEvent::SubmitRequested).expect("effect");

        reduce(&mut state, PlannerEvent::SubmitSucceeded(Vec::new()));

        let plan = state.plan.as_ref().expect("plan");
        assert!(!plan.is_displayable());
        assert_eq!(plan.totals().distance_km, 0.0);
        assert_eq!(plan.totals().time_hours, 0);
        assert!(state.error.is_none());
    }
}
