//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the redirect chain: YAML table → static table → default handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ShortenerConfig;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::routing::{MapHandler, ParseError, PathTable};

/// Full handler chain, most specific first.
pub type RedirectChain = MapHandler<MapHandler<Router>>;

/// Terminal handler: greets every path it is handed.
pub fn default_handler() -> Router {
    Router::new().fallback(hello)
}

async fn hello() -> impl IntoResponse {
    (StatusCode::OK, "Hello, world!\n")
}

/// Compose the two tables in front of `fallback`.
///
/// Paths in `yaml` win over `config.paths.static_paths`; anything in neither
/// reaches `fallback`.
pub fn build_chain<S>(
    config: &ShortenerConfig,
    yaml: &[u8],
    fallback: S,
) -> Result<MapHandler<MapHandler<S>>, ParseError> {
    let mode = config.redirect.mode;
    let yaml_table = Arc::new(PathTable::from_yaml(yaml)?);
    let static_table: Arc<PathTable> = Arc::new(config.paths.static_paths.iter().collect());

    tracing::info!(
        yaml_paths = yaml_table.len(),
        static_paths = static_table.len(),
        mode = ?mode,
        "Redirect tables built"
    );

    let static_handler = MapHandler::with_mode(static_table, mode, fallback);
    Ok(MapHandler::with_mode(yaml_table, mode, static_handler))
}

/// HTTP server for the redirect service.
pub struct HttpServer {
    router: Router,
    config: ShortenerConfig,
}

impl HttpServer {
    /// Create a new HTTP server from configuration and the raw YAML table.
    ///
    /// Fails if the YAML cannot be parsed; nothing is served in that case.
    pub fn new(config: ShortenerConfig, yaml: &[u8]) -> Result<Self, ParseError> {
        let chain = build_chain(&config, yaml, default_handler())?;
        let router = Self::build_router(&config, chain);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShortenerConfig, chain: RedirectChain) -> Router {
        Router::new()
            .fallback_service(chain)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        request_id = %request_id(req)
                    )
                }),
            )
            .layer(set_request_id_layer())
    }

    /// The assembled router, middleware included.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }
}
