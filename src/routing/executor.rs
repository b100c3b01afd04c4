//! Handler chain execution.
//!
//! # Modes
//! - `FirstMatch`: the first matching route runs and dispatch ends, whatever
//!   the handler returns.
//! - `Chain`: a matching route runs and its [`Flow`] decides whether the next
//!   route is tried. Non-matching routes are skipped. Running off the end of
//!   the registry ends the dispatch.
//!
//! Both modes share the same matching step; only continuation differs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::context::DispatchContext;
use crate::routing::route::{Flow, Route};

/// Continuation policy for a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    FirstMatch,
    #[default]
    Chain,
}

impl DispatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchMode::FirstMatch => "first_match",
            DispatchMode::Chain => "chain",
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_match" | "first" => Ok(DispatchMode::FirstMatch),
            "chain" | "next" => Ok(DispatchMode::Chain),
            other => Err(format!("unknown dispatch mode '{}'", other)),
        }
    }
}

/// Walks the registry in registration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainExecutor {
    mode: DispatchMode,
}

impl ChainExecutor {
    pub fn new(mode: DispatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Run the chain for `ctx`. Returns the number of handlers invoked.
    pub fn execute(&self, routes: &mut [Route], ctx: &mut DispatchContext) -> usize {
        let mut invoked = 0;

        for (position, route) in routes.iter_mut().enumerate() {
            if !route.matches(&ctx.path, &mut ctx.params) {
                continue;
            }

            tracing::debug!(
                path = %ctx.path,
                pattern = %route.pattern(),
                position,
                "Route matched"
            );
            invoked += 1;
            let flow = route.invoke(ctx);

            if self.mode == DispatchMode::FirstMatch || flow == Flow::Stop {
                tracing::trace!(position, mode = %self.mode, "Dispatch stopped");
                break;
            }
        }

        invoked
    }
}
