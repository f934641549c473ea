//! Redirect dispatch over a path table.
//!
//! # Responsibilities
//! - Answer requests whose path is in the table with a redirect
//! - Hand every other request, untouched, to the fallback service
//!
//! # Design Decisions
//! - A handler is any `tower::Service<Request<Body>, Response = Response>`,
//!   so dispatchers chain into each other and end in a plain axum `Router`
//! - The table is shared read-only behind an `Arc`; no per-request state
//! - Exact match on the raw URI path (no decoding, query ignored)

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{body::Body, http::Request, response::Response};
use futures_util::future::{self, Either, Ready};
use tower::{Layer, Service};

use crate::http::response::RedirectMode;
use crate::routing::table::{ParseError, PathTable};

/// Service that redirects known paths and delegates the rest to `fallback`.
#[derive(Debug, Clone)]
pub struct MapHandler<S> {
    table: Arc<PathTable>,
    mode: RedirectMode,
    fallback: S,
}

impl<S> MapHandler<S> {
    pub fn new(table: impl Into<Arc<PathTable>>, fallback: S) -> Self {
        Self::with_mode(table, RedirectMode::default(), fallback)
    }

    pub fn with_mode(table: impl Into<Arc<PathTable>>, mode: RedirectMode, fallback: S) -> Self {
        Self {
            table: table.into(),
            mode,
            fallback,
        }
    }

    pub fn table(&self) -> &PathTable {
        &self.table
    }

    pub fn mode(&self) -> RedirectMode {
        self.mode
    }

    pub fn fallback(&self) -> &S {
        &self.fallback
    }
}

impl<S> Service<Request<Body>> for MapHandler<S>
where
    S: Service<Request<Body>, Response = Response>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Either<Ready<Result<Response, S::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        match self.table.get(req.uri().path()) {
            Some(url) => Either::Left(future::ok(self.mode.respond(url))),
            None => Either::Right(self.fallback.call(req)),
        }
    }
}

/// Wrap `fallback` with a 302 dispatcher over `table`.
pub fn map_handler<S>(table: impl Into<Arc<PathTable>>, fallback: S) -> MapHandler<S> {
    MapHandler::new(table, fallback)
}

/// Parse `yaml` into a table and wrap `fallback` with a 302 dispatcher over it.
///
/// The only failure is a document that does not deserialize; no handler is
/// produced in that case.
pub fn yaml_handler<S>(yaml: &[u8], fallback: S) -> Result<MapHandler<S>, ParseError> {
    let table = PathTable::from_yaml(yaml)?;
    Ok(MapHandler::new(table, fallback))
}

/// `tower::Layer` producing [`MapHandler`]s, for use with `ServiceBuilder`.
///
/// Layers added first sit outermost and are consulted first.
#[derive(Debug, Clone)]
pub struct RedirectLayer {
    table: Arc<PathTable>,
    mode: RedirectMode,
}

impl RedirectLayer {
    pub fn new(table: impl Into<Arc<PathTable>>, mode: RedirectMode) -> Self {
        Self {
            table: table.into(),
            mode,
        }
    }
}

impl<S> Layer<S> for RedirectLayer {
    type Service = MapHandler<S>;

    fn layer(&self, fallback: S) -> Self::Service {
        MapHandler::with_mode(self.table.clone(), self.mode, fallback)
    }
}
