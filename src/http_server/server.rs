//! # HTTP Server
//!
//! Combines the contact pages and the observability endpoints into one
//! axum server.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;

use super::config::HttpServerConfig;
use super::contact_routes::{contact_routes, ContactState};
use super::observability_routes::{health_routes, observability_routes};
use crate::contact::FormHandler;
use crate::observability::{log_event_with_fields, Event};

/// HTTP server for the contact site
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around a form handler
    pub fn with_config(config: HttpServerConfig, handler: FormHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, handler: FormHandler) -> Router {
        let metrics = Arc::clone(handler.metrics());
        let contact_state = Arc::new(ContactState::new(handler));

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Landing page and contact form
            .merge(contact_routes(contact_state))
            // Counters under /observability
            .nest("/observability", observability_routes(metrics))
            .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails.
    ///
    /// `host` may be an IP literal or a name; names are resolved by the
    /// listener.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        log_event_with_fields(Event::ShutdownComplete, &[]);
        Ok(())
    }
}
