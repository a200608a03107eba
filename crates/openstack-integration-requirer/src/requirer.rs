// crates/openstack-integration-requirer/src/requirer.rs
// ============================================================================
// Module: Openstack Integration Requirer Facade
// Description: Readiness evaluation and derived accessors for the databag.
// Purpose: Convert validation failures into a logged not-ready state.
// Dependencies: openstack-integration-core, base64, tracing
// ============================================================================

//! ## Overview
//! [`IntegrationRequirer`] sits between the event plumbing and the typed
//! databag model. Every accessor parses the snapshot fresh, so derived values
//! can never go stale against the raw data. Validation failures are logged at
//! error level and reported as not-ready rather than propagated; absence of a
//! peer is not an error at all.
//!
//! Security posture: databag contents are peer-supplied and untrusted; the
//! password never reaches the log stream.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use openstack_integration_core::IntegrationData;
use openstack_integration_core::ValidationError;
use tracing::error;

// ============================================================================
// SECTION: Relation Snapshot
// ============================================================================

/// Stable snapshot of peer presence and the raw databag.
///
/// The caller hands over one snapshot per evaluation; concurrent mutation of
/// the underlying map is the caller's responsibility to avoid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationSnapshot {
    /// Whether a peer is connected on the endpoint.
    pub joined: bool,
    /// Raw databag published by the peer, when available.
    pub data: Option<BTreeMap<String, String>>,
}

impl RelationSnapshot {
    /// Snapshot for an endpoint with no peer connected.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            joined: false,
            data: None,
        }
    }

    /// Snapshot for a connected peer that has published the given databag.
    #[must_use]
    pub const fn published(data: BTreeMap<String, String>) -> Self {
        Self {
            joined: true,
            data: Some(data),
        }
    }

    /// Snapshot for a connected peer that has not published data yet.
    #[must_use]
    pub const fn joined_without_data() -> Self {
        Self {
            joined: true,
            data: None,
        }
    }
}

/// Relation event kind observed by the external trigger collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationEvent {
    /// Databag contents changed (or an unrelated trigger fired).
    Changed,
    /// The relation to the peer was broken.
    Broken,
}

// ============================================================================
// SECTION: Requirer Facade
// ============================================================================

/// Readiness facade over the openstack integration databag.
#[derive(Debug, Clone)]
pub struct IntegrationRequirer {
    /// Endpoint name used in readiness messages and log records.
    endpoint: String,
    /// Snapshot under evaluation.
    snapshot: RelationSnapshot,
}

impl IntegrationRequirer {
    /// Creates a facade over one snapshot of the endpoint's databag.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, snapshot: RelationSnapshot) -> Self {
        Self {
            endpoint: endpoint.into(),
            snapshot,
        }
    }

    /// Returns the endpoint name this facade evaluates.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns true when the databag parses into a complete, valid record.
    ///
    /// Validation failures are logged at error level and reported as
    /// not-ready; they never propagate.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        match self.parse() {
            Ok(Some(_)) => true,
            Ok(None) => {
                error!(endpoint = %self.endpoint, "relation data not yet available");
                false
            }
            Err(err) => {
                error!(endpoint = %self.endpoint, %err, "relation data not yet valid");
                false
            }
        }
    }

    /// Returns a human-readable reason when the relation is not ready.
    ///
    /// Distinguishes a missing peer (no relation, or a broken event for this
    /// relation) from a connected peer whose data is still incomplete.
    /// Returns `None` when ready.
    #[must_use]
    pub fn evaluate(&self, event: RelationEvent) -> Option<String> {
        let no_peer = !self.snapshot.joined || event == RelationEvent::Broken;
        if self.is_ready() {
            return None;
        }
        if no_peer {
            Some(format!("Missing required {}", self.endpoint))
        } else {
            Some(format!("Waiting for {}", self.endpoint))
        }
    }

    /// Returns the rendered cloud.conf document, or `None` when not ready.
    #[must_use]
    pub fn cloud_conf(&self) -> Option<String> {
        self.ready_data().map(|data| data.cloud_config())
    }

    /// Returns the rendered document as base64 text bytes, or `None` when
    /// not ready.
    #[must_use]
    pub fn cloud_conf_b64(&self) -> Option<Vec<u8>> {
        self.cloud_conf()
            .map(|conf| STANDARD.encode(conf.as_bytes()).into_bytes())
    }

    /// Returns the endpoint CA field as bytes, or `None` when absent or not
    /// ready.
    ///
    /// The field is already base64 text; it is forwarded verbatim, not
    /// decoded.
    #[must_use]
    pub fn endpoint_tls_ca(&self) -> Option<Vec<u8>> {
        self.ready_data()
            .and_then(|data| data.endpoint_tls_ca)
            .map(String::into_bytes)
    }

    /// Returns the proxy settings, or an empty map when absent or not ready.
    #[must_use]
    pub fn proxy_config(&self) -> BTreeMap<String, String> {
        self.ready_data()
            .and_then(|data| data.proxy_config)
            .unwrap_or_default()
    }

    /// Parses the snapshot into a typed record without readiness logging.
    fn parse(&self) -> Result<Option<IntegrationData>, ValidationError> {
        self.snapshot
            .data
            .as_ref()
            .map(IntegrationData::from_databag)
            .transpose()
    }

    /// Returns a freshly parsed record when the relation is ready.
    fn ready_data(&self) -> Option<IntegrationData> {
        if self.is_ready() {
            self.parse().ok().flatten()
        } else {
            None
        }
    }
}
