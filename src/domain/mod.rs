pub mod collection;
pub mod location;
pub mod map;
pub mod pin;
pub mod pinpoint;
pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use collection::{Collection, CollectionRepository};
pub use location::{Location, LocationRepository};
pub use map::{Map, MapEvent, MapRepository, Selection};
pub use pin::{Pin, PinRepository, SanitizeOutcome};
pub use pinpoint::{Pinpoint, PinpointRepository, PostUpdate};
pub use repositories::{DomainResult, RepositoryProvider};
pub use user::{User, UserRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
