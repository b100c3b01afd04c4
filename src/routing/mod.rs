//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     pattern ("/user/:id", "*", raw Regex)
//!     → matcher.rs (compile to anchored regex + parameter names)
//!     → route.rs (bind matcher to handler)
//!     → router.rs (append to registry; order = priority)
//!
//! Dispatch:
//!     raw fragment "#<prefix>/user/42"
//!     → router.rs (strip prefix, resolve → context.rs, set current path)
//!     → executor.rs (walk routes in order, match, invoke, continue/stop)
//!     → context.rs (params, matched routes, queued navigation)
//!     → router.rs (apply navigation to the location)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at registration, immutable afterwards
//! - Deterministic: same registry and path always run the same handlers
//! - No route matching is not an error
//! - One matching step shared by both dispatch modes

pub mod context;
pub mod error;
pub mod executor;
pub mod matcher;
pub mod params;
pub mod route;
pub mod router;

pub use context::{DispatchContext, Navigation};
pub use error::RouterError;
pub use executor::{ChainExecutor, DispatchMode};
pub use matcher::{compile, Matcher, Pattern, WILDCARD};
pub use params::{ParamKey, Params};
pub use route::{Flow, Handler, Route};
pub use router::{Router, RouterOptions};
