//! Pinpoint aggregate — media posts on pins

pub mod model;
pub mod repository;

pub use model::{Pinpoint, PostUpdate};
pub use repository::PinpointRepository;
