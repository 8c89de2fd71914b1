//! Shared test doubles and assertion helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use zonesync_provider::{
    ProviderError, ProviderSession, Record, RecordData, RecordGroup, RemoteRecord, Result,
    WireValue, ZoneHandle,
};

/// Asserts that a `Result` is `Ok` and unwraps it (failing the test
/// otherwise).
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Asserts that an `Option` is `Some` and unwraps it (failing the test
/// otherwise).
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

pub(crate) use {require_ok, require_some};

// ============ In-memory provider session ============

/// One stored record group, keyed by `(record_type, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGroup {
    pub id: Option<String>,
    pub record_type: String,
    /// Dot-terminated fqdn.
    pub name: String,
    pub ttl: u32,
    pub values: Vec<String>,
    pub priority: Option<u16>,
}

impl StoredGroup {
    pub fn new(record_type: &str, name: &str, ttl: u32, values: &[&str]) -> Self {
        Self {
            id: None,
            record_type: record_type.to_string(),
            name: name.to_string(),
            ttl,
            values: values.iter().map(ToString::to_string).collect(),
            priority: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }
}

type SharedZones = Arc<Mutex<HashMap<String, Vec<StoredGroup>>>>;

/// An in-memory [`ProviderSession`] standing in for a remote provider.
///
/// Zones are keyed by their dot-terminated domain; commits and deletes
/// mutate the shared store so tests can observe remote state.
#[derive(Default)]
pub struct MemorySession {
    zones: SharedZones,
    alias_capable: bool,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty zone under its dot-terminated domain.
    #[must_use]
    pub fn with_zone(self, domain: &str) -> Self {
        self.lock().insert(dotted(domain), Vec::new());
        self
    }

    /// Flips the ALIAS capability flag on.
    #[must_use]
    pub fn with_alias_support(mut self) -> Self {
        self.alias_capable = true;
        self
    }

    /// Seeds a record group into an existing zone.
    pub fn seed(&self, domain: &str, group: StoredGroup) {
        self.lock()
            .get_mut(&dotted(domain))
            .expect("zone not registered")
            .push(group);
    }

    /// Looks up a stored group by its `(record_type, fqdn)` key.
    pub fn stored(&self, domain: &str, record_type: &str, fqdn: &str) -> Option<StoredGroup> {
        self.lock()
            .get(&dotted(domain))?
            .iter()
            .find(|g| g.record_type == record_type && dotted(&g.name) == dotted(fqdn))
            .cloned()
    }

    /// Number of groups stored in a zone.
    pub fn group_count(&self, domain: &str) -> usize {
        self.lock().get(&dotted(domain)).map_or(0, Vec::len)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<StoredGroup>>> {
        self.zones.lock().expect("zone store poisoned")
    }
}

fn dotted(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

fn session_error(detail: &str) -> ProviderError {
    ProviderError::Session {
        provider: "memory".to_string(),
        detail: detail.to_string(),
    }
}

#[async_trait]
impl ProviderSession for MemorySession {
    type Zone = MemoryZone;

    fn provider_name(&self) -> &'static str {
        "memory"
    }

    fn supports_alias(&self) -> bool {
        self.alias_capable
    }

    async fn zones(&self) -> Result<Vec<MemoryZone>> {
        let mut domains: Vec<String> = self.lock().keys().cloned().collect();
        domains.sort();
        Ok(domains
            .into_iter()
            .map(|domain| MemoryZone {
                domain,
                zones: Arc::clone(&self.zones),
            })
            .collect())
    }
}

pub struct MemoryZone {
    domain: String,
    zones: SharedZones,
}

impl MemoryZone {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<StoredGroup>>> {
        self.zones.lock().expect("zone store poisoned")
    }
}

#[async_trait]
impl ZoneHandle for MemoryZone {
    type Record = MemoryRecord;

    fn domain(&self) -> &str {
        &self.domain
    }

    async fn record_groups(&self) -> Result<Vec<RecordGroup>> {
        let guard = self.lock();
        let groups = guard
            .get(&self.domain)
            .ok_or_else(|| session_error("zone disappeared"))?;
        Ok(groups
            .iter()
            .map(|g| RecordGroup {
                id: g.id.clone(),
                name: g.name.clone(),
                record_type: g.record_type.clone(),
                ttl: g.ttl,
                values: g.values.clone(),
                priority: g.priority,
            })
            .collect())
    }

    async fn find_record(&self, record_type: &str, fqdn: &str) -> Result<Option<MemoryRecord>> {
        let guard = self.lock();
        let groups = guard
            .get(&self.domain)
            .ok_or_else(|| session_error("zone disappeared"))?;
        Ok(groups
            .iter()
            .find(|g| g.record_type == record_type && dotted(&g.name) == dotted(fqdn))
            .map(|g| MemoryRecord {
                zones: Arc::clone(&self.zones),
                domain: self.domain.clone(),
                record_type: record_type.to_string(),
                fqdn: dotted(fqdn),
                ttl: g.ttl,
                value: None,
            }))
    }

    fn new_record(&self, record_type: &str, fqdn: &str) -> MemoryRecord {
        MemoryRecord {
            zones: Arc::clone(&self.zones),
            domain: self.domain.clone(),
            record_type: record_type.to_string(),
            fqdn: dotted(fqdn),
            ttl: 0,
            value: None,
        }
    }
}

pub struct MemoryRecord {
    zones: SharedZones,
    domain: String,
    record_type: String,
    fqdn: String,
    ttl: u32,
    value: Option<WireValue>,
}

#[async_trait]
impl RemoteRecord for MemoryRecord {
    fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl;
    }

    fn set_value(&mut self, value: WireValue) {
        self.value = Some(value);
    }

    async fn commit(&mut self) -> Result<()> {
        let value = self
            .value
            .clone()
            .ok_or_else(|| session_error("commit without a staged value"))?;

        let mut guard = self.zones.lock().expect("zone store poisoned");
        let groups = guard
            .get_mut(&self.domain)
            .ok_or_else(|| session_error("zone disappeared"))?;

        let existing = groups
            .iter_mut()
            .find(|g| g.record_type == self.record_type && dotted(&g.name) == self.fqdn);
        match existing {
            Some(group) => {
                group.ttl = self.ttl;
                group.values = vec![value.value];
                group.priority = value.priority;
            }
            None => groups.push(StoredGroup {
                id: None,
                record_type: self.record_type.clone(),
                name: self.fqdn.clone(),
                ttl: self.ttl,
                values: vec![value.value],
                priority: value.priority,
            }),
        }
        Ok(())
    }

    async fn delete(self) -> Result<()> {
        let mut guard = self.zones.lock().expect("zone store poisoned");
        let groups = guard
            .get_mut(&self.domain)
            .ok_or_else(|| session_error("zone disappeared"))?;
        groups.retain(|g| !(g.record_type == self.record_type && dotted(&g.name) == self.fqdn));
        Ok(())
    }
}

// ============ Canned records ============

/// One canonical record of every supported type, rooted under
/// `example.com.`.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(
            "a.example.com.",
            600,
            RecordData::A {
                address: "192.0.2.1".to_string(),
            },
        ),
        Record::new(
            "aaaa.example.com.",
            600,
            RecordData::AAAA {
                address: "2001:db8::1".to_string(),
            },
        ),
        Record::new(
            "example.com.",
            3600,
            RecordData::ALIAS {
                alias: "origin.example.com".to_string(),
            },
        ),
        Record::new(
            "www.example.com.",
            600,
            RecordData::CNAME {
                cname: "origin.example.com".to_string(),
            },
        ),
        Record::new(
            "example.com.",
            3600,
            RecordData::MX {
                preference: 10,
                exchange: "mail.example.com".to_string(),
            },
        ),
        Record::new(
            "example.com.",
            86400,
            RecordData::NS {
                nsdname: "ns1.example.com".to_string(),
            },
        ),
        Record::new(
            "example.com.",
            3600,
            RecordData::SPF {
                txtdata: "v=spf1 -all".to_string(),
            },
        ),
        Record::new(
            "txt.example.com.",
            300,
            RecordData::TXT {
                txtdata: "key=value".to_string(),
            },
        ),
        Record::new(
            "_sip._tcp.example.com.",
            60,
            RecordData::SRV {
                priority: 10,
                weight: 20,
                port: 5060,
                target: "sip.example.com.".to_string(),
            },
        ),
    ]
}
