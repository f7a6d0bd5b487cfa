//! Simulated backend.
//!
//! Logins and order submissions resolve after a fixed delay. One operation
//! may be in flight at a time; there is no cancellation, timeout or retry.

use crate::login::{validate_admin, validate_phone, AdminCredentials};
use crate::SessionError;
use bazaar_commerce::accounts::Customer;
use bazaar_commerce::catalog::seed;
use bazaar_commerce::customer::{NewOrder, OrderRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Artificial round-trip delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayConfig {
    pub login: Duration,
    pub order: Duration,
}

impl DelayConfig {
    pub fn from_millis(login_ms: u64, order_ms: u64) -> Self {
        Self {
            login: Duration::from_millis(login_ms),
            order: Duration::from_millis(order_ms),
        }
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self::from_millis(1000, 1500)
    }
}

/// Allows a single in-flight submission.
#[derive(Debug, Clone)]
pub struct SubmissionGate {
    permits: Arc<Semaphore>,
}

/// Held for the duration of a submission. Dropping it reopens the gate.
#[derive(Debug)]
pub struct SubmissionPermit {
    _permit: OwnedSemaphorePermit,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// Start a submission, or refuse if one is pending.
    pub fn try_begin(&self) -> Result<SubmissionPermit, SessionError> {
        let permit = Arc::clone(&self.permits).try_acquire_owned().map_err(|_| {
            tracing::warn!("submission refused, another one is pending");
            SessionError::SubmissionPending
        })?;
        Ok(SubmissionPermit { _permit: permit })
    }

    pub fn is_pending(&self) -> bool {
        self.permits.available_permits() == 0
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Stand-in for the login and order endpoints.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    delays: DelayConfig,
    gate: SubmissionGate,
}

impl SimulatedBackend {
    pub fn new(delays: DelayConfig) -> Self {
        Self {
            delays,
            gate: SubmissionGate::new(),
        }
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    /// Validate and "authenticate" an admin.
    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminCredentials, SessionError> {
        let credentials = validate_admin(username, password)?;
        let _permit = self.gate.try_begin()?;
        tokio::time::sleep(self.delays.login).await;
        tracing::debug!(username = %credentials.username, "admin login resolved");
        Ok(credentials)
    }

    /// Validate a phone number and find the seed customer it belongs to.
    pub async fn customer_login(&self, phone: &str) -> Result<Customer, SessionError> {
        let phone = validate_phone(phone)?;
        let _permit = self.gate.try_begin()?;
        let customer = seed::customer_by_phone(phone);
        tokio::time::sleep(self.delays.login).await;
        customer.ok_or_else(|| {
            tracing::warn!(phone, "no customer for phone");
            SessionError::CustomerNotFound(phone.to_string())
        })
    }

    /// Submit the order form. Validation failures return at once.
    pub async fn submit_order(&self, form: &NewOrder) -> Result<OrderRequest, SessionError> {
        let request = form.prepare()?;
        let _permit = self.gate.try_begin()?;
        tokio::time::sleep(self.delays.order).await;
        tracing::info!(
            customer = %request.customer_id,
            total = %request.total,
            items = request.items.len(),
            "order submitted"
        );
        Ok(request)
    }
}
