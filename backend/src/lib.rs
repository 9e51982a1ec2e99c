//! User service library: domain, ports, adapters and configuration.
//!
//! The binary in `main.rs` wires these together; tests drive the HTTP layer
//! directly through [`inbound::http::users::scope`].

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
