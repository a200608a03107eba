// crates/openstack-integration-core/src/secret.rs
// ============================================================================
// Module: Openstack Integration Secret Wrapper
// Description: Redacting wrapper for the peer-supplied password.
// Purpose: Keep the credential out of logs and debug output.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`Secret`] wraps the password shared over the integration databag. Both
//! `Debug` and `Display` render a redaction marker; the underlying value is
//! reachable only through [`Secret::reveal`]. The single intended call site
//! is the `password` line of the rendered cloud config.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;

// ============================================================================
// SECTION: Secret Type
// ============================================================================

/// Redacting wrapper around a sensitive string value.
///
/// # Invariants
/// - The wrapped value never appears in `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wraps a sensitive value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the wrapped value.
    ///
    /// Callers are responsible for keeping the revealed value out of logs.
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.0
    }

    /// Returns true when the wrapped value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
