//! Location aggregate — unique coordinates on the map plane

pub mod model;
pub mod repository;

pub use model::Location;
pub use repository::LocationRepository;
