// crates/openstack-integration-requirer/src/lib.rs
// ============================================================================
// Module: Openstack Integration Requirer Library
// Description: Readiness facade over the integration databag.
// Purpose: Gate derived cloud-config values behind a readiness check.
// Dependencies: crate::requirer
// ============================================================================

//! ## Overview
//! `openstack-integration-requirer` wraps a snapshot of the raw databag
//! published by the integrator peer. It decides whether a complete, valid
//! record is present and exposes the derived values (rendered cloud config,
//! base64 form, endpoint CA bytes, proxy settings) only when it is. The
//! external trigger collaborator owns event scheduling; this crate is
//! framework-free and recomputes everything from the snapshot on demand.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod requirer;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use requirer::IntegrationRequirer;
pub use requirer::RelationEvent;
pub use requirer::RelationSnapshot;
