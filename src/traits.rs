//! The adapter protocol consumed by the planning engine.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Record;

/// Uniform CRUD protocol over one DNS provider.
///
/// Every mutation identifies its target by the `(zone, record_type, fqdn)`
/// triple — never by free-text matching and never by `record_id`, mirroring
/// providers where the id is derived from the key. Implementations are
/// stateless across calls; callers that time a call out must treat remote
/// state as unknown and re-retrieve before retrying.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Backend identifier used in errors and logs.
    fn provider_name(&self) -> &'static str;

    /// Whether the provider can represent ALIAS records. A `false` answer
    /// obliges the planning engine to substitute or skip ALIAS handling
    /// upstream.
    fn supports_alias(&self) -> bool;

    /// Idempotent upsert: mutates the remote record matching
    /// `(record_type, fqdn)` if one exists, otherwise creates it. An
    /// existing record is not an error.
    async fn add(&self, record: &Record, zone: &str) -> Result<()>;

    /// Replaces TTL and value of the existing remote record matching
    /// `(record_type, fqdn)`.
    ///
    /// `record_id` is accepted for protocol symmetry; resolution is by key.
    /// Fails with [`RecordNotFound`](crate::ProviderError::RecordNotFound)
    /// if no record exists — unlike [`add`](Self::add), which tolerates
    /// absence.
    async fn update(&self, record_id: &str, record: &Record, zone: &str) -> Result<()>;

    /// Deletes the remote record matching `(record_type, fqdn)`. Fails with
    /// [`RecordNotFound`](crate::ProviderError::RecordNotFound) if absent.
    async fn remove(&self, record: &Record, zone: &str) -> Result<()>;

    /// Retrieves every canonical record in the zone, flattening provider
    /// record groups. SOA groups are skipped; any value that fails to
    /// decode aborts the whole retrieval — a partial snapshot would let the
    /// planning engine compute destructive changes against records that in
    /// fact exist.
    async fn retrieve_current_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Dot-terminated names of every zone visible to the configured
    /// credentials.
    async fn zones(&self) -> Result<Vec<String>>;
}
