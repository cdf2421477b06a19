//! # Pinmap Service
//!
//! Backend for a shared-map photo app: users drop geotagged pins, attach
//! photo posts ("pinpoints") to them, and organize pins into
//! membership-gated collections.
//!
//! ## Architecture
//!
//! - **domain**: entity records, per-aggregate repository traits, and the
//!   selection state machine on [`domain::Map`]
//! - **application**: services orchestrating the repositories
//! - **infrastructure**: the in-memory document store
//! - **session**: bearer-token session registry
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod session;
pub mod shared;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export the storage provider and router for easy access
pub use infrastructure::InMemoryProvider;
pub use interfaces::http::{create_api_router, ApiState};
