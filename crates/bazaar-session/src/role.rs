//! Portal roles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which portal a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Store administrator.
    Admin,
    /// Customer.
    Customer,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Marker keys that make up this role's session.
    pub fn marker_keys(&self) -> &'static [&'static str] {
        use crate::keys;
        match self {
            Role::Admin => &[keys::ADMIN_LOGGED_IN],
            Role::Customer => &[keys::CUSTOMER_LOGGED_IN, keys::CUSTOMER_ID],
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("customer".parse::<Role>(), Ok(Role::Customer));
        assert!("staff".parse::<Role>().is_err());
    }

    #[test]
    fn test_marker_keys() {
        assert_eq!(Role::Admin.marker_keys(), &["adminLoggedIn"]);
        assert_eq!(Role::Customer.marker_keys(), &["customerLoggedIn", "customerId"]);
    }
}
