//! Controller layer: reducer state transitions and command orchestration.

pub mod orchestration;
pub mod reducer;
