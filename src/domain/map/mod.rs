//! Map aggregate — the selection state machine

pub mod model;
pub mod repository;

pub use model::{Map, MapEvent, Selection};
pub use repository::MapRepository;
