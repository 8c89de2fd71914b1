//! # zonesync-provider
//!
//! Provider adapter layer for declarative DNS zone management: a canonical,
//! provider-agnostic record representation is translated to and from the
//! heterogeneous wire formats of remote DNS providers, with safe
//! create/update/delete operations and a fail-closed bulk retrieval of
//! current zone state.
//!
//! ## Layers
//!
//! - [`Record`] / [`RecordData`] — the canonical record model, one variant
//!   per supported type (A, AAAA, ALIAS, CNAME, MX, NS, SPF, TXT, SRV),
//!   immutable once built, with deterministic trailing-dot normalization.
//! - [`codec`] — pure, type-indexed mapping between canonical fields and
//!   provider wire values, including composite-field packing (SRV's
//!   `"priority weight port target"`) and both MX/SRV priority shapes.
//! - [`ProviderSession`] / [`ZoneHandle`] / [`RemoteRecord`] — the contract
//!   a concrete backend implements around its SDK/transport. This crate
//!   consumes the contract; it does not implement a transport.
//! - [`SessionAdapter`] — implements the [`RecordProvider`] protocol
//!   (`add`, `update`, `remove`, `retrieve_current_records`, `zones`,
//!   `supports_alias`) generically over any session.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonesync_provider::{
//!     ProviderSession, Record, RecordData, RecordProvider, Result, SessionAdapter,
//! };
//!
//! async fn reconcile<S: ProviderSession>(session: S) -> Result<()> {
//!     let adapter = SessionAdapter::new(session);
//!
//!     // Desired-state records carry no provider id; identity is the
//!     // (record_type, fqdn) key and `add` is an idempotent upsert.
//!     let record = Record::new(
//!         "www.example.com",
//!         600,
//!         RecordData::A {
//!             address: "192.0.2.1".to_string(),
//!         },
//!     );
//!     adapter.add(&record, "example.com.").await?;
//!
//!     for record in adapter.retrieve_current_records("example.com.").await? {
//!         println!(
//!             "{} {} -> {}",
//!             record.fqdn(),
//!             record.record_type(),
//!             record.data().display_value()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::RecordNotFound`] — `update`/`remove` target absent
//! - [`ProviderError::UnsupportedRecordType`] — wire tag outside the
//!   supported set (SOA is a recognized skip, not an error)
//! - [`ProviderError::Decode`] — malformed provider value; during bulk
//!   retrieval it is logged with the offending raw record and re-raised,
//!   aborting the retrieval rather than returning a truncated snapshot
//! - [`ProviderError::Session`] — opaque remote failure, propagated
//!   unmodified; retry/backoff belongs to the session transport

mod adapter;
pub mod codec;
mod error;
mod session;
mod traits;
mod types;

// Re-export the adapter
pub use adapter::SessionAdapter;

// Re-export the codec's wire value (the codec functions stay namespaced)
pub use codec::WireValue;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export the session contract
pub use session::{ProviderSession, RecordGroup, RemoteRecord, ZoneHandle};

// Re-export the adapter protocol
pub use traits::RecordProvider;

// Re-export the canonical record model and credential surface
pub use types::{Credentials, CredentialValidationError, Record, RecordData, RecordType};
