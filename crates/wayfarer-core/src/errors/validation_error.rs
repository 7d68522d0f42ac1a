/// Malformed per-stage input. Recoverable: the stage repeats with the same state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid budget '{input}': expected one of low, medium, high")]
    InvalidBudget { input: String },

    #[error("invalid duration '{input}': expected a positive whole number of days")]
    InvalidDuration { input: String },

    #[error("no interests given: expected a comma-separated list such as 'history, food'")]
    EmptyInterests,

    #[error("invalid travel month '{input}': expected an English month name")]
    InvalidMonth { input: String },

    #[error("empty selection: expected one of the listed destinations")]
    EmptyChoice,
}
