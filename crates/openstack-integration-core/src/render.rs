// crates/openstack-integration-core/src/render.rs
// ============================================================================
// Module: Openstack Integration Cloud-Config Rendering
// Description: Deterministic INI rendering of the integration databag.
// Purpose: Produce the byte-reproducible cloud.conf consumed downstream.
// Dependencies: crate::databag
// ============================================================================

//! ## Overview
//! Renders [`IntegrationData`] as the cloud.conf INI document for the
//! openstack cloud controller manager. Three sections are always emitted in
//! fixed order (`Global`, `LoadBalancer`, `BlockStorage`); optional keys are
//! omitted rather than emitted empty. Key order within a section follows the
//! declaration order of the schema, so output is byte-reproducible.
//!
//! Invariants:
//! - Rendering is pure; the same record always yields identical bytes.
//! - The password appears only on the `password` line of `[Global]`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::databag::IntegrationData;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path at which the downstream system mounts the endpoint CA certificate.
///
/// Emitted as a referenced value only; nothing is written to this path here.
pub const CA_FILE_PATH: &str = "/etc/config/endpoint-ca.cert";

/// Fallback load-balancer provider when Octavia is unavailable.
const FALLBACK_LB_PROVIDER: &str = "haproxy";

// ============================================================================
// SECTION: Rendering
// ============================================================================

impl IntegrationData {
    /// Renders the record as the cloud.conf INI document.
    #[must_use]
    pub fn cloud_config(&self) -> String {
        let mut global = Section::new("Global");
        global.push("auth-url", self.auth_url.as_str());
        if self.endpoint_tls_ca.is_some() {
            global.push("ca-file", CA_FILE_PATH);
        }
        global.push("username", self.username.as_str());
        global.push("password", self.password.reveal());
        global.push("region", self.region.as_str());
        if let Some(value) = &self.domain_id {
            global.push("domain-id", value.as_str());
        }
        if let Some(value) = &self.domain_name {
            global.push("domain-name", value.as_str());
        }
        if let Some(value) = &self.project_id {
            global.push("tenant-id", value.as_str());
        }
        global.push("tenant-name", self.project_name.as_str());
        if let Some(value) = &self.project_domain_id {
            global.push("tenant-domain-id", value.as_str());
        }
        global.push("tenant-domain-name", self.project_domain_name.as_str());
        if let Some(value) = &self.user_domain_id {
            global.push("user-domain-id", value.as_str());
        }
        global.push("user-domain-name", self.user_domain_name.as_str());

        let mut load_balancer = Section::new("LoadBalancer");
        if self.lb_enabled == Some(false) {
            load_balancer.push("enabled", "false");
        }
        // An older integrator never publishes has_octavia; assume Octavia is
        // available in that case.
        if self.has_octavia.unwrap_or(true) {
            load_balancer.push("use-octavia", "true");
        } else {
            load_balancer.push("use-octavia", "false");
            load_balancer.push("lb-provider", FALLBACK_LB_PROVIDER);
        }
        if let Some(value) = &self.subnet_id {
            load_balancer.push("subnet-id", value.as_str());
        }
        if let Some(value) = &self.floating_network_id {
            load_balancer.push("floating-network-id", value.as_str());
        }
        if let Some(value) = &self.lb_method {
            load_balancer.push("lb-method", value.as_str());
        }
        if self.internal_lb == Some(true) {
            load_balancer.push("internal-lb", "true");
        }
        if self.manage_security_groups == Some(true) {
            load_balancer.push("manage-security-groups", "true");
        }

        let mut block_storage = Section::new("BlockStorage");
        if let Some(value) = &self.bs_version {
            block_storage.push("bs-version", value.as_str());
        }
        if self.trust_device_path == Some(true) {
            block_storage.push("trust-device-path", "true");
        }
        if self.ignore_volume_az == Some(true) {
            block_storage.push("ignore-volume-az", "true");
        }

        render_ini(&[global, load_balancer, block_storage])
    }
}

// ============================================================================
// SECTION: INI Writer
// ============================================================================

/// Ordered key/value buffer for one INI section.
struct Section {
    /// Section header name.
    name: &'static str,
    /// Entries in emission order.
    entries: Vec<(&'static str, String)>,
}

impl Section {
    /// Creates an empty section.
    fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Appends a key/value entry, preserving insertion order.
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.entries.push((key, value.into()));
    }
}

/// Writes sections as `key = value` lines with a blank line after each
/// section. Section headers are emitted even when a section is empty.
fn render_ini(sections: &[Section]) -> String {
    let mut output = String::new();
    for section in sections {
        output.push('[');
        output.push_str(section.name);
        output.push_str("]\n");
        for (key, value) in &section.entries {
            output.push_str(key);
            output.push_str(" = ");
            output.push_str(value);
            output.push('\n');
        }
        output.push('\n');
    }
    output
}
