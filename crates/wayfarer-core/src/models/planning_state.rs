use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BudgetTier, FollowUpReport, TravelMonth};

/// Position of a session in the fixed planning sequence.
///
/// `Select` and `ConfirmSelection` are the two inputs of the selection step:
/// the provisional pick and the final pick from the refined shortlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    AwaitBudget,
    AwaitDuration,
    AwaitInterests,
    Suggest,
    Select,
    ConfirmSelection,
    Itinerary,
    KnowledgeFollowUp,
    Complete,
}

impl Stage {
    /// The stage after this one. `Complete` is absorbing.
    pub fn next(self) -> Self {
        match self {
            Self::AwaitBudget => Self::AwaitDuration,
            Self::AwaitDuration => Self::AwaitInterests,
            Self::AwaitInterests => Self::Suggest,
            Self::Suggest => Self::Select,
            Self::Select => Self::ConfirmSelection,
            Self::ConfirmSelection => Self::Itinerary,
            Self::Itinerary => Self::KnowledgeFollowUp,
            Self::KnowledgeFollowUp | Self::Complete => Self::Complete,
        }
    }

    /// Whether the stage consumes a value supplied by the user.
    pub fn needs_input(self) -> bool {
        matches!(
            self,
            Self::AwaitBudget
                | Self::AwaitDuration
                | Self::AwaitInterests
                | Self::Select
                | Self::ConfirmSelection
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitBudget => "await_budget",
            Self::AwaitDuration => "await_duration",
            Self::AwaitInterests => "await_interests",
            Self::Suggest => "suggest",
            Self::Select => "select",
            Self::ConfirmSelection => "confirm_selection",
            Self::Itinerary => "itinerary",
            Self::KnowledgeFollowUp => "knowledge_follow_up",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

/// One entry of the append-only conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

/// Accumulating per-session record threaded through the planning stages.
///
/// Fields fill in stage by stage and are never cleared; a new trip starts
/// from a fresh `PlanningState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningState {
    pub stage: Stage,
    messages: Vec<Message>,
    pub budget: Option<BudgetTier>,
    pub duration_days: Option<u32>,
    pub interests: Vec<String>,
    pub suggestions: Vec<String>,
    pub provisional_choice: Option<String>,
    pub shortlist: Vec<String>,
    pub selected_city: Option<String>,
    pub itinerary: Option<String>,
    pub travel_month: Option<TravelMonth>,
    pub follow_up: Option<FollowUpReport>,
}

impl Default for PlanningState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanningState {
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitBudget,
            messages: Vec::new(),
            budget: None,
            duration_days: None,
            interests: Vec::new(),
            suggestions: Vec::new(),
            provisional_choice: None,
            shortlist: Vec::new(),
            selected_city: None,
            itinerary: None,
            travel_month: None,
            follow_up: None,
        }
    }

    /// Start a state with the traveller's opening request in the log.
    pub fn with_opening(request: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.push_human(request);
        state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push_human(&mut self, content: impl Into<String>) {
        self.push(Role::Human, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content.into());
    }

    fn push(&mut self, role: Role, content: String) {
        self.messages.push(Message {
            role,
            content,
            at: Utc::now(),
        });
    }

    /// Interests joined into the query string used for similarity search.
    pub fn interests_query(&self) -> String {
        self.interests.join(" ")
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Complete
    }

    /// Trip summary, once a destination has been chosen.
    pub fn summary(&self) -> Option<TripSummary> {
        Some(TripSummary {
            destination: self.selected_city.clone()?,
            duration_days: self.duration_days?,
            budget: self.budget?,
            interests: self.interests.clone(),
            travel_month: self.travel_month,
        })
    }
}

/// Compact recap of the decisions in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    pub destination: String,
    pub duration_days: u32,
    pub budget: BudgetTier,
    pub interests: Vec<String>,
    pub travel_month: Option<TravelMonth>,
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Destination: {}", self.destination)?;
        writeln!(f, "Duration: {} days", self.duration_days)?;
        writeln!(f, "Budget: {}", self.budget)?;
        write!(f, "Interests: {}", self.interests.join(", "))?;
        if let Some(month) = self.travel_month {
            write!(f, "\nTravel month: {month}")?;
        }
        Ok(())
    }
}
