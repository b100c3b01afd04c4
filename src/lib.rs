//! Hash-fragment router for single-page applications.
//!
//! Patterns such as `/user/:id`, `/files/*` or raw regular expressions are
//! compiled into matchers; a [`Router`] walks them in registration order for
//! every fragment change reported by its [`Location`].
//!
//! ```
//! use hsh_router::{DispatchContext, Router};
//!
//! let mut router = Router::default();
//! router
//!     .register("/user/:id", |ctx: &mut DispatchContext| {
//!         assert_eq!(ctx.param("id"), Some("42"));
//!     })
//!     .unwrap();
//!
//! let ctx = router.show("/user/42");
//! assert_eq!(ctx.handled(), 1);
//! ```

pub mod config;
pub mod lifecycle;
pub mod location;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use location::{Location, MemoryLocation};
pub use routing::{
    DispatchContext, DispatchMode, Flow, Navigation, Params, Pattern, Route, Router, RouterError,
    RouterOptions,
};
