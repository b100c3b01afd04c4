//! In-process location used by tests and the `hsh` runtime.

use std::cell::RefCell;
use std::rc::Rc;

use crate::location::Location;

#[derive(Debug, Default)]
struct State {
    hash: String,
    hash_writes: Vec<String>,
    assigned: Vec<String>,
}

/// Location kept in memory.
///
/// Clones share state, so a test can hand one clone to a Router and keep
/// another to drive navigation and inspect what the Router asked for.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    state: Rc<RefCell<State>>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the given raw fragment (`"#/a"`, `"#"` or `""`).
    pub fn with_hash(hash: impl Into<String>) -> Self {
        let location = Self::new();
        location.state.borrow_mut().hash = hash.into();
        location
    }

    /// Simulate the user editing the fragment. Accepts the value with or
    /// without its leading `#`.
    pub fn navigate(&self, fragment: &str) {
        self.state.borrow_mut().hash = normalize(fragment);
    }

    /// Every value passed to `set_hash`, in order.
    pub fn hash_writes(&self) -> Vec<String> {
        self.state.borrow().hash_writes.clone()
    }

    /// Every url passed to `assign`, in order.
    pub fn assigned(&self) -> Vec<String> {
        self.state.borrow().assigned.clone()
    }
}

fn normalize(fragment: &str) -> String {
    if fragment.is_empty() || fragment.starts_with('#') {
        fragment.to_string()
    } else {
        format!("#{}", fragment)
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.state.borrow().hash.clone()
    }

    fn set_hash(&mut self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.hash = format!("#{}", value);
        state.hash_writes.push(value.to_string());
    }

    fn assign(&mut self, url: &str) {
        self.state.borrow_mut().assigned.push(url.to_string());
    }
}
