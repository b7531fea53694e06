//! Backend commands queued from the UI to the planner worker.

use shared::protocol::PlanRequest;

pub enum BackendCommand {
    LoadRoutes,
    GeneratePlan { request: PlanRequest },
}
