//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use hsh_router::{DispatchContext, Flow, Router};

/// Ordered record of which handlers ran.
#[derive(Clone, Default)]
pub struct Hits(Rc<RefCell<Vec<String>>>);

impl Hits {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records `label` and returns `flow`.
    pub fn handler(
        &self,
        label: &str,
        flow: Flow,
    ) -> impl FnMut(&mut DispatchContext) -> Flow + 'static {
        let hits = self.0.clone();
        let label = label.to_string();
        move |_: &mut DispatchContext| {
            hits.borrow_mut().push(label.clone());
            flow
        }
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Register `(pattern, label, flow)` triples in order.
#[allow(dead_code)]
pub fn register_all<L: hsh_router::Location>(
    router: &mut Router<L>,
    hits: &Hits,
    routes: &[(&str, &str, Flow)],
) {
    for (pattern, label, flow) in routes {
        router.register(*pattern, hits.handler(label, *flow)).unwrap();
    }
}
