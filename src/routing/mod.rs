//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table Compilation (at startup):
//!     YAML bytes / in-memory map
//!     → table.rs (parse, last-write-wins build)
//!     → Freeze as immutable PathTable
//!
//! Incoming Request (path)
//!     → dispatcher.rs (exact lookup)
//!     → hit: redirect response
//!     → miss: fallback service (next dispatcher or default handler)
//! ```
//!
//! # Design Decisions
//! - Tables built at startup, immutable at runtime
//! - Exact, case-sensitive match; no prefixes, no regex
//! - Chains are ordinary tower services nested inside each other

pub mod dispatcher;
pub mod table;

pub use dispatcher::{map_handler, yaml_handler, MapHandler, RedirectLayer};
pub use table::{parse_yaml, ParseError, PathEntry, PathTable};
