//! Pin aggregate — markers bound to locations

pub mod model;
pub mod repository;

pub use model::{Pin, SanitizeOutcome};
pub use repository::PinRepository;
