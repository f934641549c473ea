//! Configuration-driven URL redirect service.
//!
//! Paths found in a YAML table (then an in-memory table) are answered with a
//! redirect; everything else falls through to a default handler.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ShortenerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{map_handler, yaml_handler, MapHandler, PathTable};
