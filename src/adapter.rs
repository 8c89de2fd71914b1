//! Generic adapter orchestration: translates the uniform CRUD protocol into
//! session calls over any [`ProviderSession`] backend.

use async_trait::async_trait;

use crate::codec::{self, ensure_trailing_dot};
use crate::error::{ProviderError, Result};
use crate::session::{ProviderSession, RemoteRecord, ZoneHandle};
use crate::traits::RecordProvider;
use crate::types::Record;

/// Implements [`RecordProvider`] over any [`ProviderSession`].
///
/// Construction is explicit: the backend builds its session from
/// credentials and hands it in ready. The adapter holds no other state, so
/// it is shareable across tasks whenever the session is.
pub struct SessionAdapter<S> {
    session: S,
}

impl<S: ProviderSession> SessionAdapter<S> {
    /// Wraps a ready session.
    pub const fn new(session: S) -> Self {
        Self { session }
    }

    /// The underlying session.
    pub const fn session(&self) -> &S {
        &self.session
    }

    /// Resolves the zone handle for `zone`, exactly once per operation.
    /// Every subsequent lookup in the operation goes through this handle.
    async fn zone(&self, zone: &str) -> Result<S::Zone> {
        let domain = ensure_trailing_dot(zone);
        self.session
            .find_zone(&domain)
            .await?
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: self.session.provider_name().to_string(),
                zone: domain,
            })
    }

    async fn existing_record(
        &self,
        zone: &S::Zone,
        record: &Record,
    ) -> Result<Option<<S::Zone as ZoneHandle>::Record>> {
        zone.find_record(record.record_type().as_str(), record.fqdn())
            .await
    }

    fn record_not_found(&self, record: &Record) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: self.session.provider_name().to_string(),
            record_type: record.record_type().as_str().to_string(),
            fqdn: record.fqdn().to_string(),
        }
    }
}

#[async_trait]
impl<S: ProviderSession> RecordProvider for SessionAdapter<S> {
    fn provider_name(&self) -> &'static str {
        self.session.provider_name()
    }

    fn supports_alias(&self) -> bool {
        self.session.supports_alias()
    }

    async fn add(&self, record: &Record, zone: &str) -> Result<()> {
        let zone = self.zone(zone).await?;
        let mut remote = match self.existing_record(&zone, record).await? {
            // Upsert: mutating an existing record is not an error.
            Some(existing) => existing,
            None => zone.new_record(record.record_type().as_str(), record.fqdn()),
        };
        remote.set_ttl(record.ttl());
        remote.set_value(codec::encode(record.data()));
        remote.commit().await
    }

    async fn update(&self, _record_id: &str, record: &Record, zone: &str) -> Result<()> {
        let zone = self.zone(zone).await?;
        let mut remote = self
            .existing_record(&zone, record)
            .await?
            .ok_or_else(|| self.record_not_found(record))?;
        remote.set_ttl(record.ttl());
        remote.set_value(codec::encode(record.data()));
        remote.commit().await
    }

    async fn remove(&self, record: &Record, zone: &str) -> Result<()> {
        let zone = self.zone(zone).await?;
        let remote = self
            .existing_record(&zone, record)
            .await?
            .ok_or_else(|| self.record_not_found(record))?;
        remote.delete().await
    }

    async fn retrieve_current_records(&self, zone: &str) -> Result<Vec<Record>> {
        let zone = self.zone(zone).await?;
        let mut records = Vec::new();

        for group in zone.record_groups().await? {
            // SOA is zone metadata, not zone content.
            if group.record_type.eq_ignore_ascii_case("SOA") {
                continue;
            }

            let record_type = match codec::parse_record_type(&group.record_type) {
                Ok(record_type) => record_type,
                Err(e) => {
                    log::error!(
                        "cannot build record from zone '{}': unrecognized type '{}': {e}",
                        zone.domain(),
                        group.record_type,
                    );
                    return Err(e);
                }
            };

            let fqdn = ensure_trailing_dot(&group.name);
            let record_id = group.id.clone().unwrap_or_else(|| fqdn.clone());

            for value in &group.values {
                let data = match codec::decode(record_type, value, group.priority) {
                    Ok(data) => data,
                    Err(e) => {
                        // Fail closed: report the offending raw record, then
                        // abort the whole retrieval rather than hand back a
                        // silently incomplete snapshot.
                        log::error!(
                            "cannot build record from zone '{}' ({} '{value}'): {e}",
                            zone.domain(),
                            group.record_type,
                        );
                        return Err(e);
                    }
                };
                records.push(
                    Record::new(fqdn.clone(), group.ttl, data).with_record_id(record_id.clone()),
                );
            }
        }

        Ok(records)
    }

    async fn zones(&self) -> Result<Vec<String>> {
        Ok(self
            .session
            .zones()
            .await?
            .iter()
            .map(|zone| zone.domain().to_string())
            .collect())
    }
}
