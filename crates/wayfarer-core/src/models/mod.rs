mod budget;
mod degradation_event;
mod destination;
mod knowledge;
mod month;
mod narrative;
mod planning_state;

pub use budget::{BudgetTier, TripLength};
pub use degradation_event::DegradationEvent;
pub use destination::{BudgetNotes, DestinationRecord, PlaceCategory, PlaceEntry};
pub use knowledge::{DestinationBrief, FieldOutcome, FollowUpReport, KnowledgeEntry};
pub use month::TravelMonth;
pub use narrative::NarrativeRequest;
pub use planning_state::{Message, PlanningState, Role, Stage, TripSummary};
