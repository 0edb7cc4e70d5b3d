//! Service layer modules for external collaborators.
//!
//! Contains the lead-store hand-off client and the visitor-geolocation
//! client. Both are one-shot, no-retry callers; failure semantics live with
//! the callers.

pub mod geo;
pub mod lead_store;

pub use geo::GeoClient;
pub use lead_store::LeadStoreClient;
