use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterestError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unrepresentable value: {field} = {value} cannot be expressed as a monetary amount")]
    Unrepresentable { field: String, value: f64 },
}
