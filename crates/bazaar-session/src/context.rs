//! Session context.
//!
//! Owned by whoever drives the portals (the CLI's `main`) and passed down
//! explicitly. Lifecycle: create, [`SessionContext::mount`] once per portal,
//! [`SessionContext::logout`] to clear.

use crate::{Role, SessionError, SessionStore};
use bazaar_commerce::accounts::Customer;
use bazaar_commerce::catalog::seed;
use bazaar_commerce::ids::CustomerId;
use serde::{Deserialize, Serialize};

/// Marker key names. Their presence is the whole session contract.
pub mod keys {
    /// Set to `"true"` after admin login.
    pub const ADMIN_LOGGED_IN: &str = "adminLoggedIn";
    /// Set to `"true"` after customer login.
    pub const CUSTOMER_LOGGED_IN: &str = "customerLoggedIn";
    /// Id of the logged-in customer.
    pub const CUSTOMER_ID: &str = "customerId";
}

const MARKER_VALUE: &str = "true";

/// Snapshot of a portal's markers, taken at mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalSession {
    /// No markers for the mounted portal.
    Anonymous,
    /// Admin marker present.
    Admin,
    /// Customer markers present, with the stored id.
    Customer(CustomerId),
}

impl PortalSession {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, PortalSession::Anonymous)
    }
}

/// Session state for one run of the front end.
pub struct SessionContext<S> {
    store: S,
    mounted: Option<(Role, PortalSession)>,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mounted: None,
        }
    }

    /// Read the markers for `role`.
    ///
    /// Markers are read only on the first mount of a portal; later calls
    /// return the same snapshot even if the store changed underneath.
    pub fn mount(&mut self, role: Role) -> Result<&PortalSession, SessionError> {
        let stale = !matches!(&self.mounted, Some((mounted, _)) if *mounted == role);
        if stale {
            let snapshot = self.read_markers(role)?;
            tracing::debug!(role = %role, session = ?snapshot, "portal mounted");
            self.mounted = Some((role, snapshot));
        }
        match &self.mounted {
            Some((_, snapshot)) => Ok(snapshot),
            None => Err(SessionError::NotLoggedIn(role)),
        }
    }

    fn read_markers(&self, role: Role) -> Result<PortalSession, SessionError> {
        let session = match role {
            Role::Admin => {
                if self.store.exists(keys::ADMIN_LOGGED_IN)? {
                    PortalSession::Admin
                } else {
                    PortalSession::Anonymous
                }
            }
            Role::Customer => {
                let logged_in = self.store.exists(keys::CUSTOMER_LOGGED_IN)?;
                match self.store.get(keys::CUSTOMER_ID)? {
                    Some(id) if logged_in && !id.is_empty() => {
                        PortalSession::Customer(CustomerId::new(id))
                    }
                    _ => PortalSession::Anonymous,
                }
            }
        };
        Ok(session)
    }

    /// Mount the admin portal, failing without the admin marker.
    pub fn require_admin(&mut self) -> Result<(), SessionError> {
        match self.mount(Role::Admin)? {
            PortalSession::Admin => Ok(()),
            _ => Err(SessionError::NotLoggedIn(Role::Admin)),
        }
    }

    /// Mount the customer portal and resolve the stored id to a seed customer.
    ///
    /// An id that matches no customer counts as not logged in.
    pub fn require_customer(&mut self) -> Result<Customer, SessionError> {
        let id = match self.mount(Role::Customer)? {
            PortalSession::Customer(id) => id.clone(),
            _ => return Err(SessionError::NotLoggedIn(Role::Customer)),
        };
        seed::customer_by_id(id.as_str()).ok_or_else(|| {
            tracing::warn!(customer = %id, "stored customer id matches no customer");
            SessionError::NotLoggedIn(Role::Customer)
        })
    }

    /// Write the admin marker.
    pub fn login_admin(&mut self) -> Result<(), SessionError> {
        self.store.set(keys::ADMIN_LOGGED_IN, MARKER_VALUE)?;
        self.mounted = Some((Role::Admin, PortalSession::Admin));
        tracing::info!("admin logged in");
        Ok(())
    }

    /// Write the customer markers.
    pub fn login_customer(&mut self, customer: &Customer) -> Result<(), SessionError> {
        self.store.set(keys::CUSTOMER_LOGGED_IN, MARKER_VALUE)?;
        self.store.set(keys::CUSTOMER_ID, customer.id.as_str())?;
        self.mounted = Some((Role::Customer, PortalSession::Customer(customer.id.clone())));
        tracing::info!(customer = %customer.id, "customer logged in");
        Ok(())
    }

    /// Remove the role's markers.
    pub fn logout(&mut self, role: Role) -> Result<(), SessionError> {
        for key in role.marker_keys() {
            self.store.remove(key)?;
        }
        if matches!(&self.mounted, Some((mounted, _)) if *mounted == role) {
            self.mounted = Some((role, PortalSession::Anonymous));
        }
        tracing::info!(role = %role, "logged out");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
