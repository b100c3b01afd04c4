//! Per-dispatch context handed to route handlers.

use serde::Serialize;

use crate::routing::params::Params;

/// Navigation requested by a handler during dispatch.
///
/// Requests are applied to the location once the handler chain has finished;
/// the resulting fragment change comes back as a fresh notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Navigation {
    /// Set the fragment to `prefix + path`.
    Internal(String),
    /// Leave the application for a full page load.
    External(String),
}

/// State of a single dispatch: the path being resolved and everything the
/// matching routes have extracted from it so far.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchContext {
    pub(crate) path: String,
    pub(crate) params: Params,
    pub(crate) matched: Vec<String>,
    pub(crate) navigations: Vec<Navigation>,
}

impl DispatchContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Shorthand for `params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Patterns of the routes whose handlers ran, in order.
    pub fn matched(&self) -> &[String] {
        &self.matched
    }

    /// Number of handlers invoked.
    pub fn handled(&self) -> usize {
        self.matched.len()
    }

    pub fn navigations(&self) -> &[Navigation] {
        &self.navigations
    }

    /// Queue an internal redirect. Empty or missing paths are ignored.
    pub fn redirect_internal<'a>(&mut self, path: impl Into<Option<&'a str>>) {
        if let Some(path) = path.into().filter(|p| !p.is_empty()) {
            self.navigations.push(Navigation::Internal(path.to_string()));
        }
    }

    /// Queue a full navigation away from the application. Empty or missing
    /// targets are ignored.
    pub fn redirect_external<'a>(&mut self, url: impl Into<Option<&'a str>>) {
        if let Some(url) = url.into().filter(|u| !u.is_empty()) {
            self.navigations.push(Navigation::External(url.to_string()));
        }
    }
}
