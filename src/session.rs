//! Provider session contract: the opaque remote API surface the adapter
//! consumes.
//!
//! This crate does not implement a session. Concrete backends wrap their
//! SDK/transport (HTTP client, authentication, transport-level retries)
//! behind these traits and hand a ready session to
//! [`SessionAdapter::new`](crate::SessionAdapter::new).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::codec::WireValue;
use crate::error::Result;

/// One provider-side grouping of values under a `(type, name)` key.
///
/// Providers may represent multiple values of one logical record (e.g.
/// several A addresses) as a single group; retrieval flattens every value
/// into its own canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordGroup {
    /// Provider identity for the group, when the provider assigns one.
    /// Absent it, the dot-terminated group name stands in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Group name (fqdn). May arrive from the provider without its
    /// trailing dot.
    pub name: String,
    /// Raw wire tag, e.g. `"A"` or `"SOA"`.
    pub record_type: String,
    /// TTL shared by every value in the group.
    pub ttl: u32,
    /// Raw wire values.
    pub values: Vec<String>,
    /// Side-channel priority attribute (MX/SRV on some providers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

/// A mutable handle to one remote record: stage mutations, then `commit`.
#[async_trait]
pub trait RemoteRecord: Send {
    /// Stages a new TTL.
    fn set_ttl(&mut self, ttl: u32);

    /// Stages a new wire value.
    fn set_value(&mut self, value: WireValue);

    /// Persists staged mutations to the provider.
    async fn commit(&mut self) -> Result<()>;

    /// Deletes the record remotely. Irreversible from this layer's
    /// perspective.
    async fn delete(self) -> Result<()>;
}

/// A resolved zone: the unit of record enumeration and keyed lookup.
#[async_trait]
pub trait ZoneHandle: Send + Sync {
    /// The remote record handle type this zone hands out.
    type Record: RemoteRecord;

    /// Dot-terminated zone domain.
    fn domain(&self) -> &str;

    /// Enumerates every record group in the zone, in provider order.
    /// Ordering is not guaranteed stable across calls.
    async fn record_groups(&self) -> Result<Vec<RecordGroup>>;

    /// Looks up the record holding the `(record_type, fqdn)` key.
    async fn find_record(&self, record_type: &str, fqdn: &str) -> Result<Option<Self::Record>>;

    /// Prepares a new, uncommitted record under the `(record_type, fqdn)`
    /// key. Nothing is sent remotely until
    /// [`commit`](RemoteRecord::commit).
    fn new_record(&self, record_type: &str, fqdn: &str) -> Self::Record;
}

/// An authenticated handle to the remote provider API.
#[async_trait]
pub trait ProviderSession: Send + Sync {
    /// The zone handle type this session resolves.
    type Zone: ZoneHandle + Send;

    /// Backend identifier used in errors and logs.
    fn provider_name(&self) -> &'static str;

    /// Whether the remote provider can represent ALIAS records. The
    /// planning engine queries this before synthesizing ALIAS records;
    /// it must be answered truthfully.
    fn supports_alias(&self) -> bool {
        false
    }

    /// Every zone visible to the configured credentials.
    async fn zones(&self) -> Result<Vec<Self::Zone>>;

    /// Exact-match lookup on the dot-terminated domain.
    ///
    /// The default implementation scans [`zones`](Self::zones); backends
    /// with a direct zone lookup should override it.
    async fn find_zone(&self, domain: &str) -> Result<Option<Self::Zone>> {
        Ok(self
            .zones()
            .await?
            .into_iter()
            .find(|zone| zone.domain() == domain))
    }
}
