// crates/openstack-integration-core/tests/common/mod.rs
// =============================================================================
// Module: Databag Test Helpers
// Description: Shared helpers for databag validation and rendering tests.
// Purpose: Reduce duplication across integration tests for the core crate.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::BTreeMap;

use serde_json::Value;
use serde_json::json;

/// Base64 text of a small certificate stand-in (`b"cert-bytes"`).
pub const VALID_CA_B64: &str = "Y2VydC1ieXRlcw==";

/// Inserts a field as its JSON-encoded string form.
pub fn put(raw: &mut BTreeMap<String, String>, field: &str, value: Value) {
    raw.insert(field.to_string(), value.to_string());
}

/// Returns a databag holding only the required fields.
pub fn required_databag() -> BTreeMap<String, String> {
    let mut raw = BTreeMap::new();
    put(&mut raw, "auth_url", json!("https://keystone.example:5000/v3"));
    put(&mut raw, "password", json!("hunter2"));
    put(&mut raw, "project_domain_name", json!("project-domain"));
    put(&mut raw, "project_name", json!("k8s"));
    put(&mut raw, "region", json!("RegionOne"));
    put(&mut raw, "username", json!("svc-admin"));
    put(&mut raw, "user_domain_name", json!("user-domain"));
    raw
}

/// Returns a databag with every declared field populated.
pub fn full_databag() -> BTreeMap<String, String> {
    let mut raw = required_databag();
    put(&mut raw, "bs_version", json!("v2"));
    put(&mut raw, "domain_id", json!("domain-1"));
    put(&mut raw, "domain_name", json!("example-domain"));
    put(&mut raw, "endpoint_tls_ca", json!(VALID_CA_B64));
    put(&mut raw, "floating_network_id", json!("net-float"));
    put(&mut raw, "has_octavia", json!(true));
    put(&mut raw, "ignore_volume_az", json!(true));
    put(&mut raw, "internal_lb", json!(true));
    put(&mut raw, "lb_enabled", json!(true));
    put(&mut raw, "lb_method", json!("ROUND_ROBIN"));
    put(&mut raw, "project_id", json!("project-1"));
    put(&mut raw, "project_domain_id", json!("project-domain-1"));
    put(&mut raw, "proxy_config", json!({"HTTP_PROXY": "http://squid.internal:3128"}));
    put(&mut raw, "manage_security_groups", json!(true));
    put(&mut raw, "subnet_id", json!("subnet-1"));
    put(&mut raw, "trust_device_path", json!(true));
    put(&mut raw, "user_domain_id", json!("user-domain-1"));
    put(&mut raw, "version", json!(1));
    raw
}
