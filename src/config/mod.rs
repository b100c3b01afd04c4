//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, every pattern compiles)
//!     → AppConfig (validated, immutable)
//!     → lifecycle::startup builds the Router
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → sent over a channel; the runtime rebuilds its Router
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_or_default, parse_config, ConfigError};
pub use schema::{AppConfig, ObservabilityConfig, RouteAction, RouteConfig, RuntimeConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
