//! Route registry and dispatch.
//!
//! # Responsibilities
//! - Store routes in registration order (match priority)
//! - Resolve a path into a fresh [`DispatchContext`] and run the chain
//! - Bridge fragment changes from a [`Location`] into dispatches
//! - Forward redirect requests to the [`Location`]
//!
//! # Design Decisions
//! - One explicit Router per application, no global state
//! - Duplicate patterns are allowed; the earlier registration wins
//! - Handler redirects are applied after the chain completes and re-enter
//!   through the next fragment notification, never recursively
//! - A handler that always redirects to its own path loops forever; callers
//!   own that guard

use serde::{Deserialize, Serialize};

use crate::location::{Location, MemoryLocation};
use crate::observability::metrics;
use crate::routing::context::{DispatchContext, Navigation};
use crate::routing::error::RouterError;
use crate::routing::executor::{ChainExecutor, DispatchMode};
use crate::routing::matcher::{Pattern, WILDCARD};
use crate::routing::route::{Flow, Route};

/// Options recognised by [`Router::set`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Text required between `#` and the path (e.g. `!` for `#!/path`).
    pub prefix: String,

    /// Path used when the fragment is empty or unusable.
    pub index: String,

    /// Continuation policy.
    pub mode: DispatchMode,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            index: "/".to_string(),
            mode: DispatchMode::default(),
        }
    }
}

pub struct Router<L: Location = MemoryLocation> {
    routes: Vec<Route>,
    options: RouterOptions,
    current: Option<String>,
    location: L,
    running: bool,
    last_seen: Option<String>,
}

impl Default for Router<MemoryLocation> {
    fn default() -> Self {
        Self::new(MemoryLocation::new())
    }
}

impl<L: Location> Router<L> {
    pub fn new(location: L) -> Self {
        Self::with_options(location, RouterOptions::default())
    }

    pub fn with_options(location: L, options: RouterOptions) -> Self {
        Self {
            routes: Vec::new(),
            options,
            current: None,
            location,
            running: false,
            last_seen: None,
        }
    }

    // -- registration -------------------------------------------------------

    /// Append a route. Registration order is match priority.
    pub fn register<F, R>(
        &mut self,
        pattern: impl Into<Pattern>,
        handler: F,
    ) -> Result<&mut Self, RouterError>
    where
        F: FnMut(&mut DispatchContext) -> R + 'static,
        R: Into<Flow>,
    {
        let route = Route::new(pattern, handler)?;
        tracing::debug!(
            pattern = %route.pattern(),
            params = ?route.param_names(),
            position = self.routes.len(),
            "Route registered"
        );
        self.routes.push(route);
        Ok(self)
    }

    /// Register a handler for every path (`*`).
    pub fn register_catch_all<F, R>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&mut DispatchContext) -> R + 'static,
        R: Into<Flow>,
    {
        // `*` always compiles.
        if let Err(e) = self.register(WILDCARD, handler) {
            tracing::error!(error = %e, "Wildcard route failed to compile");
        }
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    // -- options ------------------------------------------------------------

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Set a single option. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: &str) {
        match name {
            "prefix" => self.options.prefix = value.to_string(),
            "index" => self.options.index = value.to_string(),
            "mode" => match value.parse() {
                Ok(mode) => self.options.mode = mode,
                Err(e) => tracing::warn!(error = %e, "Ignoring dispatch mode"),
            },
            _ => {
                tracing::debug!(option = name, "Ignoring unknown router option");
                return;
            }
        }
        tracing::debug!(option = name, value, "Router option set");
    }

    /// Set several options at once.
    pub fn set_all<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in options {
            self.set(name.as_ref(), value.as_ref());
        }
    }

    // -- dispatch -----------------------------------------------------------

    /// Last path handed to [`resolve`](Self::resolve).
    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Build a fresh context for `path` and make it the current path.
    pub fn resolve(&mut self, path: &str) -> DispatchContext {
        self.current = Some(path.to_string());
        DispatchContext::new(path)
    }

    /// Resolve `path` and run the handler chain over the whole registry.
    ///
    /// Navigation requested by handlers is applied afterwards. The returned
    /// context reports what ran.
    pub fn show(&mut self, path: &str) -> DispatchContext {
        let mut ctx = self.resolve(path);
        let mode = self.options.mode;

        let invoked = ChainExecutor::new(mode).execute(&mut self.routes, &mut ctx);
        metrics::record_dispatch(mode, invoked);
        if invoked == 0 {
            tracing::debug!(path, "No route matched");
        }

        for navigation in ctx.navigations() {
            match navigation {
                Navigation::Internal(target) => self.redirect_internal(target.as_str()),
                Navigation::External(target) => self.redirect_external(target.as_str()),
            }
        }
        ctx
    }

    // -- location bridge ----------------------------------------------------

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Ask the location to show `prefix + path`. Empty or missing paths are ignored.
    pub fn redirect_internal<'a>(&mut self, path: impl Into<Option<&'a str>>) {
        let Some(path) = path.into().filter(|p| !p.is_empty()) else {
            return;
        };
        let fragment = format!("{}{}", self.options.prefix, path);
        tracing::info!(fragment = %fragment, "Internal redirect");
        metrics::record_redirect("internal");
        self.location.set_hash(&fragment);
    }

    /// Ask the location to leave the application for `url`. Empty or missing
    /// targets are ignored.
    pub fn redirect_external<'a>(&mut self, url: impl Into<Option<&'a str>>) {
        let Some(url) = url.into().filter(|u| !u.is_empty()) else {
            return;
        };
        tracing::info!(url, "External redirect");
        metrics::record_redirect("external");
        self.location.assign(url);
    }

    /// Strip `#` and the prefix from a raw fragment. `None` when the fragment
    /// does not have the expected shape or carries no path.
    pub fn path_from_fragment<'a>(&self, raw: &'a str) -> Option<&'a str> {
        raw.strip_prefix('#')
            .and_then(|rest| rest.strip_prefix(self.options.prefix.as_str()))
            .filter(|path| !path.is_empty())
    }

    /// Dispatch a raw fragment delivered by a change notification.
    ///
    /// A fragment without the expected prefix is replaced by `prefix + index`
    /// instead of being dispatched.
    pub fn handle_fragment(&mut self, raw: &str) -> Option<DispatchContext> {
        match self.path_from_fragment(raw) {
            Some(path) => Some(self.show(path)),
            None => {
                tracing::warn!(
                    fragment = raw,
                    prefix = %self.options.prefix,
                    "Unexpected fragment, redirecting to index"
                );
                metrics::record_invalid_fragment();
                let index = self.options.index.clone();
                self.redirect_internal(index.as_str());
                None
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin observing the location.
    ///
    /// Normalizes an empty fragment to `prefix + index`, then dispatches the
    /// current fragment. Calling it again does nothing.
    pub fn start(&mut self) -> Option<DispatchContext> {
        if self.running {
            return None;
        }
        self.running = true;

        let hash = self.location.hash();
        if hash.len() <= 1 + self.options.prefix.len() {
            let index = self.options.index.clone();
            self.redirect_internal(index.as_str());
        }

        tracing::info!(
            prefix = %self.options.prefix,
            mode = %self.options.mode,
            routes = self.routes.len(),
            "Router started"
        );
        self.poll()
    }

    /// Check the location for a fragment change and dispatch it.
    ///
    /// Repeated identical fragments are coalesced. Does nothing until
    /// [`start`](Self::start) has been called.
    pub fn poll(&mut self) -> Option<DispatchContext> {
        if !self.running {
            return None;
        }
        let hash = self.location.hash();
        if self.last_seen.as_deref() == Some(hash.as_str()) {
            return None;
        }
        self.last_seen = Some(hash.clone());
        self.handle_fragment(&hash)
    }
}
