use shared::protocol::JourneyStep;

/// Aggregate figures derived from a step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JourneyTotals {
    pub distance_km: f64,
    pub time_hours: u64,
}

impl JourneyTotals {
    /// Recomputes both aggregates from `steps`.
    ///
    /// Distance is the plain sum of leg distances; time is the summed leg
    /// minutes rounded up to whole hours.
    pub fn from_steps(steps: &[JourneyStep]) -> Self {
        let distance_km = steps.iter().map(|step| step.km).sum();
        let minutes: f64 = steps.iter().map(|step| step.time_used).sum();
        let time_hours = (minutes / 60.0).ceil() as u64;
        Self {
            distance_km,
            time_hours,
        }
    }
}

/// An itinerary as the planner screen consumes it: the ordered legs plus
/// the totals derived from them.
///
/// The fields are private so the totals can never be mutated apart from
/// the sequence they describe; construction is the only way in.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyPlan {
    steps: Vec<JourneyStep>,
    totals: JourneyTotals,
}

impl JourneyPlan {
    /// Takes ownership of the received step sequence, preserving its order
    /// exactly, and computes the aggregates.
    pub fn from_steps(steps: Vec<JourneyStep>) -> Self {
        let totals = JourneyTotals::from_steps(&steps);
        Self { steps, totals }
    }

    pub fn steps(&self) -> &[JourneyStep] {
        &self.steps
    }

    pub fn totals(&self) -> JourneyTotals {
        self.totals
    }

    /// A plan is only worth rendering when it has at least one leg.
    pub fn is_displayable(&self) -> bool {
        !self.steps.is_empty()
    }
}
