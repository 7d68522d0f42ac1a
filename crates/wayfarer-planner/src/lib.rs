//! # wayfarer-planner
//!
//! Drives a trip through the fixed planning sequence:
//!
//! ```text
//! budget → duration → interests → suggest → select → confirm
//!        → itinerary → knowledge follow-up → complete
//! ```
//!
//! `Planner` owns the shared indexes and collaborators; `PlanningSession`
//! owns one traveller's `PlanningState`.

pub mod input;
pub mod planner;
pub mod report;
pub mod session;
mod stages;
pub mod tracing_setup;

pub use planner::Planner;
pub use report::StageReport;
pub use session::PlanningSession;
