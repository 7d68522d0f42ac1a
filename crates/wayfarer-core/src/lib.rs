//! # wayfarer-core
//!
//! Foundation crate for the Wayfarer travel planner.
//! Defines the shared types, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WayfarerConfig;
pub use errors::{WayfarerError, WayfarerResult};
pub use models::{BudgetTier, DestinationRecord, PlanningState, Stage};
