//! Pseudo-session handling for the Bazaar portals.
//!
//! A logged-in state is nothing more than a few marker keys in a
//! [`SessionStore`]. The [`SessionContext`] reads them once when a portal is
//! mounted and clears them on logout; nothing revalidates them in between.
//!
//! # Example
//!
//! ```rust
//! use bazaar_session::{MemoryStore, PortalSession, Role, SessionContext};
//!
//! let mut ctx = SessionContext::new(MemoryStore::new());
//! assert_eq!(ctx.mount(Role::Admin).unwrap(), &PortalSession::Anonymous);
//! ```

mod backend;
mod context;
mod error;
mod login;
mod role;
mod store;

pub use backend::{DelayConfig, SimulatedBackend, SubmissionGate, SubmissionPermit};
pub use context::{keys, PortalSession, SessionContext};
pub use error::SessionError;
pub use login::{validate_admin, validate_phone, AdminCredentials};
pub use role::Role;
pub use store::{FileStore, MemoryStore, SessionStore};
