use serde::{Deserialize, Serialize};

/// Opaque route identifier assigned by the planning service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteId(pub i64);
