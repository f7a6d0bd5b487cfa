//! Logging setup for Bazaar.
//!
//! Library crates only emit `tracing` events. The binary calls [`init`]
//! once to install a subscriber that writes them to stderr, as text or JSON.

mod logging;

pub use logging::*;
