// crates/openstack-integration-core/src/lib.rs
// ============================================================================
// Module: Openstack Integration Core Library
// Description: Typed databag model and cloud-config rendering.
// Purpose: Validate peer-supplied integration fields and render cloud.conf.
// Dependencies: crate::{databag, render, secret}
// ============================================================================

//! ## Overview
//! `openstack-integration-core` defines the typed view of the databag shared
//! by the openstack integrator peer. Raw fields arrive as JSON-encoded
//! strings; this crate decodes them fail-closed into [`IntegrationData`] and
//! renders the record as the three-section cloud.conf INI document consumed
//! by the downstream cloud controller.
//!
//! Security posture: databag contents are peer-supplied and untrusted.
//! Validation rejects missing, empty, or mistyped fields before anything is
//! rendered.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod databag;
pub mod render;
pub mod secret;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use databag::IntegrationData;
pub use databag::ValidationError;
pub use render::CA_FILE_PATH;
pub use secret::Secret;
