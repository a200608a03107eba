//! Secret wrapper tests for openstack-integration-core.
// crates/openstack-integration-core/tests/secret.rs
// =============================================================================
// Module: Secret Wrapper Tests
// Description: Tests for the redacting password wrapper.
// Purpose: Ensure the wrapped value is reachable only through reveal().
// =============================================================================
//! ## Overview
//! Validates construction through the conversion impls, the emptiness probe
//! used for credential checks, and redaction of both `Debug` and `Display`
//! output.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use openstack_integration_core::Secret;

#[test]
fn conversions_preserve_the_wrapped_value() {
    let from_str = Secret::from("hunter2");
    let from_string = Secret::from("hunter2".to_string());
    let from_new = Secret::new("hunter2");
    assert_eq!(from_str, from_string);
    assert_eq!(from_str, from_new);
    assert_eq!(from_str.reveal(), "hunter2");
}

#[test]
fn is_empty_tracks_the_wrapped_value() {
    assert!(Secret::new("").is_empty());
    assert!(!Secret::new("hunter2").is_empty());
}

#[test]
fn debug_and_display_are_redacted() {
    let secret = Secret::new("hunter2");
    assert_eq!(format!("{secret:?}"), "Secret(***)");
    assert_eq!(format!("{secret}"), "***");
}

#[test]
fn transparent_deserialization_accepts_plain_strings() {
    let secret: Secret = serde_json::from_str("\"hunter2\"").expect("plain string deserializes");
    assert_eq!(secret.reveal(), "hunter2");
    assert!(!format!("{secret:?}").contains("hunter2"));
}
