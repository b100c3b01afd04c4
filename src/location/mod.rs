//! Location subsystem: the boundary to whatever owns the address bar.
//!
//! # Data Flow
//! ```text
//! User / platform changes the fragment
//!     → Location::hash() observed by Router::poll()
//!     → Router strips `#` + prefix, dispatches the path
//!
//! Handler or caller asks for navigation
//!     → Router::redirect_internal()  → Location::set_hash(prefix + path)
//!     → Router::redirect_external()  → Location::assign(url)
//! ```
//!
//! # Design Decisions
//! - The router never talks to a platform API directly; it only sees this trait
//! - `hash()` returns the raw fragment including the leading `#` (or "")
//! - `set_hash()` takes the value without `#`, like `location.hash = ...`

pub mod memory;

pub use memory::MemoryLocation;

/// The external collaborator that owns the current URL.
pub trait Location {
    /// Raw fragment including the leading `#`, or an empty string.
    fn hash(&self) -> String;

    /// Replace the fragment. `value` does not include the `#`.
    fn set_hash(&mut self, value: &str);

    /// Navigate away from the application.
    fn assign(&mut self, url: &str);
}
