//! Application services — one per aggregate

pub mod collection;
pub mod location;
pub mod map;
pub mod pin;
pub mod pinpoint;

pub use collection::CollectionService;
pub use location::LocationService;
pub use map::{MapMutation, MapService};
pub use pin::PinService;
pub use pinpoint::PinpointService;
