//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP layer (TraceLayer, request ids)
//!     → logging.rs (structured log events)
//!     → stdout (pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID recorded on every request span
//! - Redirect dispatch itself never logs; the trace layer covers it

pub mod logging;

pub use logging::init_logging;
