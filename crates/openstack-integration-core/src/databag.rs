// crates/openstack-integration-core/src/databag.rs
// ============================================================================
// Module: Openstack Integration Databag Model
// Description: Typed record of the fields shared by the integrator peer.
// Purpose: Decode JSON-encoded databag values fail-closed into typed fields.
// Dependencies: crate::secret, base64, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The integrator peer publishes every databag value as a string containing a
//! JSON literal: a string field arrives as `"\"value\""`, a boolean as
//! `"true"`, an absent optional as `"null"` or a missing key. Construction
//! strips that JSON layer and coerces each field into its declared type
//! through one generic decode helper. Required fields must be present and
//! non-empty; optional string fields that decode to empty text are treated
//! as absent; `endpoint_tls_ca` must be valid standard base64.
//!
//! A record is built fresh from each databag snapshot and is immutable once
//! constructed. Construction is pure and performs no I/O.
//!
//! Security posture: databag contents are peer-supplied and untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::secret::Secret;

// ============================================================================
// SECTION: Databag Record
// ============================================================================

/// Typed view of the databag shared over the openstack integration relation.
///
/// # Invariants
/// - Required string fields are non-empty.
/// - `endpoint_tls_ca`, when present, holds valid standard base64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationData {
    /// Keystone authentication URL.
    pub auth_url: String,
    /// Service credential password (redacted outside rendering).
    pub password: Secret,
    /// Domain name of the project.
    pub project_domain_name: String,
    /// Project (tenant) name.
    pub project_name: String,
    /// Region name.
    pub region: String,
    /// Service credential username.
    pub username: String,
    /// Domain name of the user.
    pub user_domain_name: String,
    /// Cinder block-storage API version.
    pub bs_version: Option<String>,
    /// Domain identifier.
    pub domain_id: Option<String>,
    /// Domain name.
    pub domain_name: Option<String>,
    /// Base64-encoded CA certificate for the keystone endpoint.
    pub endpoint_tls_ca: Option<String>,
    /// Network identifier for floating IPs.
    pub floating_network_id: Option<String>,
    /// Whether the underlying cloud runs Octavia (`None` means unknown,
    /// treated as available for rendering).
    pub has_octavia: Option<bool>,
    /// Whether to ignore volume availability zones.
    pub ignore_volume_az: Option<bool>,
    /// Whether load balancers should be internal.
    pub internal_lb: Option<bool>,
    /// Whether load balancing is enabled (`None` means enabled).
    pub lb_enabled: Option<bool>,
    /// Load-balancing method.
    pub lb_method: Option<String>,
    /// Project (tenant) identifier.
    pub project_id: Option<String>,
    /// Domain identifier of the project.
    pub project_domain_id: Option<String>,
    /// Proxy environment settings for the downstream system.
    pub proxy_config: Option<BTreeMap<String, String>>,
    /// Whether the cloud controller manages security groups.
    pub manage_security_groups: Option<bool>,
    /// Subnet identifier for load balancers.
    pub subnet_id: Option<String>,
    /// Whether to trust the block device path reported by the cloud.
    pub trust_device_path: Option<bool>,
    /// Domain identifier of the user.
    pub user_domain_id: Option<String>,
    /// Schema version published by the integrator.
    pub version: Option<i64>,
}

impl IntegrationData {
    /// Builds a typed record from a raw databag snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a required field is missing, JSON
    /// null, or empty; when a field's decoded shape does not match its
    /// declared type; or when `endpoint_tls_ca` is not valid base64.
    pub fn from_databag(raw: &BTreeMap<String, String>) -> Result<Self, ValidationError> {
        let endpoint_tls_ca = optional_text(raw, "endpoint_tls_ca")?;
        if let Some(cert) = &endpoint_tls_ca {
            validate_base64_cert(cert)?;
        }
        Ok(Self {
            auth_url: required(raw, "auth_url")?,
            password: Secret::new(required(raw, "password")?),
            project_domain_name: required(raw, "project_domain_name")?,
            project_name: required(raw, "project_name")?,
            region: required(raw, "region")?,
            username: required(raw, "username")?,
            user_domain_name: required(raw, "user_domain_name")?,
            bs_version: optional_text(raw, "bs_version")?,
            domain_id: optional_text(raw, "domain_id")?,
            domain_name: optional_text(raw, "domain_name")?,
            endpoint_tls_ca,
            floating_network_id: optional_text(raw, "floating_network_id")?,
            has_octavia: optional(raw, "has_octavia", "boolean")?,
            ignore_volume_az: optional(raw, "ignore_volume_az", "boolean")?,
            internal_lb: optional(raw, "internal_lb", "boolean")?,
            lb_enabled: optional(raw, "lb_enabled", "boolean")?,
            lb_method: optional_text(raw, "lb_method")?,
            project_id: optional_text(raw, "project_id")?,
            project_domain_id: optional_text(raw, "project_domain_id")?,
            proxy_config: optional(raw, "proxy_config", "string map")?,
            manage_security_groups: optional(raw, "manage_security_groups", "boolean")?,
            subnet_id: optional_text(raw, "subnet_id")?,
            trust_device_path: optional(raw, "trust_device_path", "boolean")?,
            user_domain_id: optional_text(raw, "user_domain_id")?,
            version: optional(raw, "version", "integer")?,
        })
    }
}

// ============================================================================
// SECTION: Field Decoding
// ============================================================================

/// Decodes an optional field: strips the JSON layer, then coerces the value
/// into the declared type. Missing keys and JSON null both map to `None`.
fn optional<T: DeserializeOwned>(
    raw: &BTreeMap<String, String>,
    field: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ValidationError> {
    let Some(encoded) = raw.get(field) else {
        return Ok(None);
    };
    let value: serde_json::Value = serde_json::from_str(encoded).map_err(|err| {
        ValidationError::Decode {
            field,
            reason: err.to_string(),
        }
    })?;
    if value.is_null() {
        return Ok(None);
    }
    let typed = serde_json::from_value(value)
        .map_err(|_| ValidationError::TypeMismatch { field, expected })?;
    Ok(Some(typed))
}

/// Decodes an optional string field. Empty text is treated as absent so that
/// rendering stays omission-only.
fn optional_text(
    raw: &BTreeMap<String, String>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    Ok(optional::<String>(raw, field, "string")?.filter(|value| !value.is_empty()))
}

/// Decodes a required string field, rejecting missing, null, and empty values.
fn required(
    raw: &BTreeMap<String, String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match optional::<String>(raw, field, "string")? {
        None => Err(ValidationError::MissingField { field }),
        Some(value) if value.is_empty() => Err(ValidationError::EmptyField { field }),
        Some(value) => Ok(value),
    }
}

/// Validates that the endpoint CA field holds standard base64 text.
///
/// The decoded bytes are discarded; the field is forwarded verbatim and the
/// downstream system performs its own decode.
fn validate_base64_cert(cert: &str) -> Result<(), ValidationError> {
    STANDARD
        .decode(cert.as_bytes())
        .map_err(|err| ValidationError::InvalidCertificate {
            reason: err.to_string(),
        })?;
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Validation failure raised while constructing [`IntegrationData`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or JSON null.
    #[error("missing required field: {field}")]
    MissingField {
        /// Databag key of the missing field.
        field: &'static str,
    },
    /// A required field decoded to an empty string.
    #[error("required field is empty: {field}")]
    EmptyField {
        /// Databag key of the empty field.
        field: &'static str,
    },
    /// A field value is not valid JSON text.
    #[error("field {field} is not valid json: {reason}")]
    Decode {
        /// Databag key of the malformed field.
        field: &'static str,
        /// Parser error detail.
        reason: String,
    },
    /// A field decoded to a JSON shape other than its declared type.
    #[error("field {field} does not match expected type {expected}")]
    TypeMismatch {
        /// Databag key of the mistyped field.
        field: &'static str,
        /// Declared semantic type of the field.
        expected: &'static str,
    },
    /// The endpoint CA field failed the base64 well-formedness check.
    #[error("endpoint_tls_ca is not valid base64: {reason}")]
    InvalidCertificate {
        /// Decoder error detail.
        reason: String,
    },
}
