//! A registered route: compiled pattern plus handler.

use std::fmt;

use crate::routing::context::DispatchContext;
use crate::routing::error::RouterError;
use crate::routing::matcher::{Matcher, Pattern};
use crate::routing::params::Params;

/// What the executor should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Try the next registered route.
    Continue,
    /// End the dispatch.
    Stop,
}

impl From<()> for Flow {
    fn from(_: ()) -> Self {
        Flow::Stop
    }
}

impl From<bool> for Flow {
    /// `true` continues the chain.
    fn from(next: bool) -> Self {
        if next {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }
}

/// Callback invoked for a matching route.
///
/// Implemented for any `FnMut(&mut DispatchContext) -> R` where `R` converts
/// into [`Flow`], so plain closures returning `()` stop the chain.
pub trait Handler {
    fn call(&mut self, ctx: &mut DispatchContext) -> Flow;
}

impl<F, R> Handler for F
where
    F: FnMut(&mut DispatchContext) -> R,
    R: Into<Flow>,
{
    fn call(&mut self, ctx: &mut DispatchContext) -> Flow {
        self(ctx).into()
    }
}

pub struct Route {
    matcher: Matcher,
    handler: Box<dyn Handler>,
}

impl Route {
    pub fn new(
        pattern: impl Into<Pattern>,
        handler: impl Handler + 'static,
    ) -> Result<Self, RouterError> {
        let matcher = pattern.into().compile()?;
        Ok(Self {
            matcher,
            handler: Box::new(handler),
        })
    }

    pub fn pattern(&self) -> &str {
        self.matcher.source()
    }

    pub fn param_names(&self) -> &[String] {
        self.matcher.param_names()
    }

    /// Test `path`, writing captures into `params` on success.
    pub fn matches(&self, path: &str, params: &mut Params) -> bool {
        self.matcher.capture_into(path, params)
    }

    pub(crate) fn invoke(&mut self, ctx: &mut DispatchContext) -> Flow {
        ctx.matched.push(self.matcher.source().to_string());
        self.handler.call(ctx)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.matcher.source())
            .field("param_names", &self.matcher.param_names())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_match_populates_params() {
        let route = Route::new("/user/:id", |_: &mut DispatchContext| {}).unwrap();
        let mut params = Params::new();
        assert!(route.matches("/user/7", &mut params));
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(route.param_names(), ["id"]);
    }

    #[test]
    fn test_invoke_records_pattern_and_flow() {
        let mut route = Route::new("/a", |_: &mut DispatchContext| Flow::Continue).unwrap();
        let mut ctx = DispatchContext::new("/a");
        assert_eq!(route.invoke(&mut ctx), Flow::Continue);
        assert_eq!(ctx.matched(), ["/a"]);
    }

    #[test]
    fn test_handler_return_conversions() {
        let mut stop = Route::new("*", |_: &mut DispatchContext| {}).unwrap();
        let mut next = Route::new("*", |_: &mut DispatchContext| true).unwrap();
        let mut ctx = DispatchContext::new("/x");
        assert_eq!(stop.invoke(&mut ctx), Flow::Stop);
        assert_eq!(next.invoke(&mut ctx), Flow::Continue);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Route::new("nope", |_: &mut DispatchContext| {}).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
