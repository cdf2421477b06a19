//! Session management - bearer tokens for acting users

pub mod manager;

pub use manager::{SessionManager, SharedSessionManager};
