//! # deejay HTTP Server Module
//!
//! Server-rendered contact site on axum.
//!
//! # Endpoints
//!
//! - `/` - Landing page
//! - `/contact` - Contact form (`GET`) and submission (`POST`)
//! - `/health` - Health check
//! - `/observability/metrics` - Submission counters

pub mod config;
pub mod contact_routes;
pub mod observability_routes;
pub mod pages;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
