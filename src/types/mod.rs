use thiserror::Error;

mod domain_types;
mod ids;
mod location;

pub use domain_types::*;
pub use ids::*;
pub use location::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid list identifier: {0}")]
    InvalidListId(String),

    #[error("Value out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds { value: usize, min: usize, max: usize },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid cookie header: {reason}")]
    InvalidCookie { reason: String },
}
