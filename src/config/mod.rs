//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShortenerConfig (validated, immutable)
//!
//! redirect table file (YAML)
//!     → loader.rs (raw bytes only)
//!     → routing::table (parse & build)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_paths_file, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, PathsConfig, RedirectConfig,
    ShortenerConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
