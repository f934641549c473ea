//! Redirect response construction.
//!
//! # Responsibilities
//! - Turn a matched destination URL into the client-facing response
//! - Keep the two answer styles (302 redirect, plain-text body) in one place
//!
//! # Design Decisions
//! - `Found` (302) is the default; `Body` reproduces the older 200 behaviour
//! - A URL that is not a valid header value becomes a 500, never a panic

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// How a matched path is answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectMode {
    /// `302 Found` with `Location: <url>`.
    #[default]
    Found,
    /// `200 OK` with the URL as a plain-text body.
    Body,
}

impl RedirectMode {
    /// Build the response for a matched destination.
    pub fn respond(self, url: &str) -> Response {
        match self {
            RedirectMode::Found => found(url),
            RedirectMode::Body => url_body(url),
        }
    }
}

/// `302 Found` pointing at `url`.
pub fn found(url: &str) -> Response {
    match HeaderValue::from_str(url) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(_) => {
            tracing::warn!(url = %url.escape_debug(), "Destination is not a valid Location header");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `200 OK` whose body is the destination URL.
pub fn url_body(url: &str) -> Response {
    (StatusCode::OK, url.to_owned()).into_response()
}
