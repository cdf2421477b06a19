//! HTTP REST API interfaces
//!
//! - `middleware`: session authentication
//! - `common`: response envelope, error mapping, validated JSON
//! - `modules`: per-resource DTOs and handlers
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiState};
