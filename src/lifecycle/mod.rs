//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build Router (routes in file order) → start()
//!
//! Reload:
//!     New config → Build fresh Router on the same Location → start()
//! ```
//!
//! # Design Decisions
//! - A reload replaces the whole registry; routes are never patched in place
//! - The Location outlives routers so the current fragment survives a reload

pub mod startup;

pub use startup::build_router;
