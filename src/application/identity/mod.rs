//! Identity module — user management & authentication

pub mod service;

pub use service::{AuthResult, UserService};
