pub mod error;
pub mod interest;
pub mod types;
pub mod validation;

pub use error::InterestError;
pub use interest::comparison::{compare_interest, compound_interest_report, simple_interest_report};
pub use interest::compound::{compute_compound_interest, DEFAULT_COMPOUNDS_PER_YEAR};
pub use interest::simple::compute_simple_interest;
pub use types::*;

/// Standard result type for all interest operations
pub type InterestResult<T> = Result<T, InterestError>;
