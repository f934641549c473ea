//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned)
//!     → routing::dispatcher (YAML table, then static table, then default handler)
//!     → response.rs (302 / URL body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::RedirectMode;
pub use server::{build_chain, default_handler, HttpServer, RedirectChain};
