//! Business logic — services orchestrating the domain repositories

pub mod identity;
pub mod services;

pub use identity::UserService;
pub use services::{
    CollectionService, LocationService, MapMutation, MapService, PinService, PinpointService,
};
