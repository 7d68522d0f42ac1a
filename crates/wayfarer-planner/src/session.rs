//! One traveller's planning session.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;
use wayfarer_core::errors::WayfarerResult;
use wayfarer_core::models::{PlanningState, Stage, TripSummary};

use crate::planner::Planner;
use crate::report::StageReport;

/// Owns a `PlanningState` and drives it with a shared `Planner`.
pub struct PlanningSession {
    id: Uuid,
    planner: Arc<Planner>,
    state: PlanningState,
}

impl PlanningSession {
    pub fn new(planner: Arc<Planner>) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "session started");
        Self {
            id,
            planner,
            state: PlanningState::new(),
        }
    }

    /// Start with the traveller's opening request in the message log.
    pub fn with_opening(planner: Arc<Planner>, request: &str) -> Self {
        let mut session = Self::new(planner);
        session.state = PlanningState::with_opening(request);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &PlanningState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    /// Feed user input to the current stage.
    pub fn submit(&mut self, input: &str) -> WayfarerResult<StageReport> {
        debug!(session = %self.id, stage = %self.state.stage, "input submitted");
        self.planner.advance(&mut self.state, Some(input))
    }

    /// Run stages that need no input until one does, or the trip is complete.
    pub fn run_until_input(&mut self) -> WayfarerResult<Vec<StageReport>> {
        let mut reports = Vec::new();
        while !self.state.stage.needs_input() && !self.state.is_complete() {
            reports.push(self.planner.advance(&mut self.state, None)?);
        }
        Ok(reports)
    }

    pub fn set_travel_month(&mut self, month: &str) -> WayfarerResult<StageReport> {
        self.planner.set_travel_month(&mut self.state, month)
    }

    /// Re-run the knowledge follow-up for the selected city.
    pub fn refresh_follow_up(&mut self) -> WayfarerResult<StageReport> {
        self.planner.follow_up(&mut self.state)
    }

    pub fn summary(&self) -> Option<TripSummary> {
        self.state.summary()
    }

    /// Discard the state and start a new trip under a new id.
    pub fn reset(&mut self) {
        let previous = self.id;
        self.id = Uuid::new_v4();
        self.state = PlanningState::new();
        info!(previous = %previous, session = %self.id, "session reset");
    }
}
