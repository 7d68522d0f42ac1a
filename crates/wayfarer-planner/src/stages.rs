//! Stage transitions. Every method checks the session is at its stage,
//! validates before mutating, and advances on success.

use tracing::{debug, info, warn};
use wayfarer_core::errors::{CollaboratorError, WayfarerError, WayfarerResult};
use wayfarer_core::models::{
    BudgetTier, DestinationBrief, FieldOutcome, FollowUpReport, NarrativeRequest, PlanningState,
    Stage, TravelMonth, TripLength,
};
use wayfarer_retrieval::resolve_choice;

use crate::input::{parse_duration, parse_interests};
use crate::planner::Planner;
use crate::report::StageReport;

fn expect_stage(state: &PlanningState, expected: Stage) -> WayfarerResult<()> {
    if state.stage == expected {
        Ok(())
    } else {
        Err(WayfarerError::StageOrder {
            expected,
            actual: state.stage,
        })
    }
}

/// Log the report as the assistant's reply and move to the next stage.
fn finish(state: &mut PlanningState, report: StageReport) -> StageReport {
    state.push_assistant(report.message());
    let from = state.stage;
    state.stage = from.next();
    debug!(from = %from, to = %state.stage, "stage advanced");
    report
}

fn outcome(result: Result<String, CollaboratorError>) -> FieldOutcome {
    match result {
        Ok(text) => FieldOutcome::Available { text },
        Err(e) => {
            debug!(error = %e, "tool lookup unavailable");
            FieldOutcome::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

impl Planner {
    /// Run whatever the current stage is. Input is ignored by stages that
    /// take none.
    pub fn advance(
        &self,
        state: &mut PlanningState,
        input: Option<&str>,
    ) -> WayfarerResult<StageReport> {
        let input = input.unwrap_or("");
        match state.stage {
            Stage::AwaitBudget => self.submit_budget(state, input),
            Stage::AwaitDuration => self.submit_duration(state, input),
            Stage::AwaitInterests => self.submit_interests(state, input),
            Stage::Suggest => self.suggest(state),
            Stage::Select => self.select(state, input),
            Stage::ConfirmSelection => self.confirm_selection(state, input),
            Stage::Itinerary => self.create_itinerary(state),
            Stage::KnowledgeFollowUp => self.follow_up(state),
            Stage::Complete => Err(WayfarerError::StageOrder {
                expected: Stage::AwaitBudget,
                actual: Stage::Complete,
            }),
        }
    }

    pub fn submit_budget(
        &self,
        state: &mut PlanningState,
        input: &str,
    ) -> WayfarerResult<StageReport> {
        expect_stage(state, Stage::AwaitBudget)?;
        let tier: BudgetTier = input.parse()?;
        state.push_human(input);
        state.budget = Some(tier);
        Ok(finish(
            state,
            StageReport::BudgetAccepted {
                tier,
                description: tier.description().to_string(),
            },
        ))
    }

    pub fn submit_duration(
        &self,
        state: &mut PlanningState,
        input: &str,
    ) -> WayfarerResult<StageReport> {
        expect_stage(state, Stage::AwaitDuration)?;
        let days = parse_duration(input)?;
        state.push_human(input);
        state.duration_days = Some(days);
        Ok(finish(
            state,
            StageReport::DurationAccepted {
                days,
                length: TripLength::from_days(days),
            },
        ))
    }

    pub fn submit_interests(
        &self,
        state: &mut PlanningState,
        input: &str,
    ) -> WayfarerResult<StageReport> {
        expect_stage(state, Stage::AwaitInterests)?;
        let interests = parse_interests(input)?;
        state.push_human(input);
        state.interests = interests.clone();
        Ok(finish(state, StageReport::InterestsAccepted { interests }))
    }

    /// Nearest destinations to the interests, sliced by budget tier.
    pub fn suggest(&self, state: &mut PlanningState) -> WayfarerResult<StageReport> {
        expect_stage(state, Stage::Suggest)?;
        let tier = state.budget.ok_or(WayfarerError::StageOrder {
            expected: Stage::AwaitBudget,
            actual: state.stage,
        })?;
        let query = state.interests_query();
        let ranked = self.catalog.ranked_names(&query, self.retrieval.suggest_k)?;
        let candidates = self.partitioner.partition(&ranked, tier).to_vec();
        info!(query = %query, budget = %tier, ranked = ranked.len(), ?candidates, "suggestions");

        state.suggestions = candidates.clone();
        Ok(finish(state, StageReport::Suggestions { candidates }))
    }

    /// Provisional pick from the suggestions; builds the refined shortlist.
    pub fn select(&self, state: &mut PlanningState, input: &str) -> WayfarerResult<StageReport> {
        expect_stage(state, Stage::Select)?;
        let choice = resolve_choice(input, &state.suggestions)?;
        let shortlist = self
            .refiner
            .refine(&self.catalog, &state.interests_query(), &choice)?;

        state.push_human(choice.as_str());
        state.provisional_choice = Some(choice.clone());
        state.shortlist = shortlist.clone();
        Ok(finish(
            state,
            StageReport::Shortlist {
                provisional: choice,
                shortlist,
            },
        ))
    }

    /// Final pick from the refined shortlist.
    pub fn confirm_selection(
        &self,
        state: &mut PlanningState,
        input: &str,
    ) -> WayfarerResult<StageReport> {
        expect_stage(state, Stage::ConfirmSelection)?;
        let city = resolve_choice(input, &state.shortlist)?;
        info!(city = %city, "destination selected");

        state.push_human(city.as_str());
        state.selected_city = Some(city.clone());
        Ok(finish(state, StageReport::Selected { city }))
    }

    /// Ask the narrative collaborator for the itinerary. On failure the
    /// session stays at this stage.
    pub fn create_itinerary(&self, state: &mut PlanningState) -> WayfarerResult<StageReport> {
        expect_stage(state, Stage::Itinerary)?;
        let request = match (&state.selected_city, state.duration_days, state.budget) {
            (Some(city), Some(duration_days), Some(budget)) => NarrativeRequest {
                city: city.clone(),
                interests: state.interests.clone(),
                duration_days,
                budget,
                month: state.travel_month,
            },
            _ => {
                return Err(WayfarerError::StageOrder {
                    expected: Stage::ConfirmSelection,
                    actual: state.stage,
                })
            }
        };

        let text = self.narrator.generate(&request).map_err(|e| {
            warn!(narrator = self.narrator.name(), error = %e, "itinerary generation failed");
            e
        })?;
        state.itinerary = Some(text.clone());
        Ok(finish(state, StageReport::Itinerary { text }))
    }

    /// Knowledge-base facts plus the travel-tool brief for the selected city.
    ///
    /// May be re-run once complete; the facts do not change.
    pub fn follow_up(&self, state: &mut PlanningState) -> WayfarerResult<StageReport> {
        if state.stage != Stage::Complete {
            expect_stage(state, Stage::KnowledgeFollowUp)?;
        }
        let city = state.selected_city.clone().ok_or(WayfarerError::StageOrder {
            expected: Stage::ConfirmSelection,
            actual: state.stage,
        })?;

        let knowledge = self.knowledge.lookup(&city, state.budget)?;
        let month = state.travel_month;
        let brief = DestinationBrief {
            weather: outcome(self.tools.weather(&city, month)),
            attractions: outcome(self.tools.attractions(&city)),
            restaurants: outcome(self.tools.restaurants(&city)),
            accommodations: outcome(self.tools.accommodations(&city)),
            transportation: outcome(self.tools.transportation(&city)),
        };
        let available = brief.fields().iter().filter(|(_, o)| o.is_available()).count();
        info!(city = %city, tools = self.tools.name(), available, "follow-up ready");

        let report = FollowUpReport { knowledge, brief };
        state.follow_up = Some(report.clone());
        let report = StageReport::FollowUp { report };
        if state.stage == Stage::Complete {
            return Ok(report);
        }
        Ok(finish(state, report))
    }

    /// Record the month of travel. Allowed any time before the itinerary.
    pub fn set_travel_month(
        &self,
        state: &mut PlanningState,
        input: &str,
    ) -> WayfarerResult<StageReport> {
        if state.stage >= Stage::Itinerary {
            return Err(WayfarerError::StageOrder {
                expected: Stage::ConfirmSelection,
                actual: state.stage,
            });
        }
        let month: TravelMonth = input.parse()?;
        state.push_human(input);
        state.travel_month = Some(month);
        let report = StageReport::TravelMonthSet { month };
        state.push_assistant(report.message());
        Ok(report)
    }
}
