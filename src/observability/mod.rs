//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing and runtime produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (dispatch / redirect counters)
//!
//! Consumers:
//!     → stderr (fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; subscribers are installed by binaries
//! - Counters without an installed recorder are no-ops

pub mod logging;
pub mod metrics;
