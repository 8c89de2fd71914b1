use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::codec::{ensure_trailing_dot, strip_trailing_dot};

// ============ Record Types ============

/// Wire tag of a supported DNS record type.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"ALIAS"`, etc.).
///
/// SOA is deliberately absent: it is zone metadata, not zone content, and is
/// recognized and skipped during retrieval rather than represented
/// canonically. Any tag outside this set is a hard translation failure,
/// never a silent coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Apex alias record (provider-synthesized, not a standard RR type).
    Alias,
    /// Canonical name record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Sender Policy Framework record (TXT-shaped, distinct wire tag).
    Spf,
    /// Text record.
    Txt,
    /// Service locator record.
    Srv,
}

impl RecordType {
    /// The uppercase wire tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Alias => "ALIAS",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Spf => "SPF",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe representation of canonical record data.
///
/// Each variant carries the fields specific to that record type. Canonical
/// form keeps name-valued fields without their trailing dot, with one
/// exception: the SRV `target` is always dot-terminated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — maps a hostname to an IPv4 address.
    A {
        /// IPv4 address literal (e.g., `"192.0.2.1"`).
        address: String,
    },

    /// AAAA record — maps a hostname to an IPv6 address.
    AAAA {
        /// IPv6 address literal (e.g., `"2001:db8::1"`).
        address: String,
    },

    /// ALIAS record — apex alias to another name.
    ALIAS {
        /// Target name, no trailing dot in canonical form.
        alias: String,
    },

    /// CNAME record — alias from one name to another.
    CNAME {
        /// Target name, no trailing dot in canonical form.
        cname: String,
    },

    /// MX record — mail exchange server.
    MX {
        /// Preference (lower = preferred).
        preference: u16,
        /// Mail server name, no trailing dot in canonical form.
        exchange: String,
    },

    /// NS record — authoritative name server.
    NS {
        /// Name server name, no trailing dot in canonical form.
        nsdname: String,
    },

    /// SPF record — sender policy text, distinct wire tag from TXT.
    SPF {
        /// Raw text data, preserved losslessly.
        txtdata: String,
    },

    /// TXT record — arbitrary text data.
    TXT {
        /// Raw text data, preserved losslessly.
        txtdata: String,
    },

    /// SRV record — service locator.
    SRV {
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target name. The one name field that keeps its trailing dot in
        /// canonical form.
        target: String,
    },
}

impl RecordData {
    /// Returns the [`RecordType`] discriminant for this record data.
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        match self {
            Self::A { .. } => RecordType::A,
            Self::AAAA { .. } => RecordType::Aaaa,
            Self::ALIAS { .. } => RecordType::Alias,
            Self::CNAME { .. } => RecordType::Cname,
            Self::MX { .. } => RecordType::Mx,
            Self::NS { .. } => RecordType::Ns,
            Self::SPF { .. } => RecordType::Spf,
            Self::TXT { .. } => RecordType::Txt,
            Self::SRV { .. } => RecordType::Srv,
        }
    }

    /// Returns the primary display value (the address for A/AAAA, the target
    /// for CNAME/ALIAS/SRV, the exchange for MX).
    #[must_use]
    pub fn display_value(&self) -> &str {
        match self {
            Self::A { address } | Self::AAAA { address } => address,
            Self::ALIAS { alias } => alias,
            Self::CNAME { cname } => cname,
            Self::MX { exchange, .. } => exchange,
            Self::NS { nsdname } => nsdname,
            Self::SPF { txtdata } | Self::TXT { txtdata } => txtdata,
            Self::SRV { target, .. } => target,
        }
    }

    /// Applies the canonical dot conventions to name-valued fields.
    ///
    /// Deterministic and idempotent, so round-tripping through the codec is
    /// stable.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        match self {
            Self::ALIAS { alias } => Self::ALIAS {
                alias: strip_trailing_dot(&alias),
            },
            Self::CNAME { cname } => Self::CNAME {
                cname: strip_trailing_dot(&cname),
            },
            Self::MX {
                preference,
                exchange,
            } => Self::MX {
                preference,
                exchange: strip_trailing_dot(&exchange),
            },
            Self::NS { nsdname } => Self::NS {
                nsdname: strip_trailing_dot(&nsdname),
            },
            Self::SRV {
                priority,
                weight,
                port,
                target,
            } => Self::SRV {
                priority,
                weight,
                port,
                target: ensure_trailing_dot(&target),
            },
            other @ (Self::A { .. }
            | Self::AAAA { .. }
            | Self::SPF { .. }
            | Self::TXT { .. }) => other,
        }
    }
}

/// A canonical, provider-agnostic DNS record.
///
/// Immutable once built: changes are expressed as new records replacing old
/// ones. Constructed either by the planning engine as a desired record
/// (no `record_id`), or by the adapter during retrieval (with the
/// provider-assigned identity attached).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fqdn: String,
    ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_id: Option<String>,
    data: RecordData,
}

impl Record {
    /// Builds a canonical record, normalizing the trailing dot on `fqdn`
    /// and the dot conventions on name-valued data fields.
    pub fn new(fqdn: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            fqdn: ensure_trailing_dot(&fqdn.into()),
            ttl,
            record_id: None,
            data: data.normalized(),
        }
    }

    /// Attaches the provider-assigned identity. Used by the retrieval path;
    /// desired-state records carry no id, the adapter resolves identity by
    /// `(record_type, fqdn)`.
    #[must_use]
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    /// Fully-qualified domain name, always dot-terminated.
    #[must_use]
    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    /// Time to live in seconds.
    #[must_use]
    pub const fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Provider-assigned identity, present only for retrieved records.
    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Type-specific record data.
    #[must_use]
    pub const fn data(&self) -> &RecordData {
        &self.data
    }

    /// The record's type discriminant.
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Flat key/value credential mapping for a provider backend.
///
/// Loaded by an external configuration component and consumed by the
/// backend when it constructs its session. The adapter itself never reads
/// credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials(HashMap<String, String>);

impl Credentials {
    /// Creates an empty credential mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing key/value mapping.
    #[must_use]
    pub fn from_map(map: HashMap<String, String>) -> Self {
        Self(map)
    }

    /// Inserts a credential field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a credential field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Fetches a required field, verifying that it is present and non-empty.
    pub fn require(
        &self,
        key: &str,
        label: &str,
    ) -> std::result::Result<&str, CredentialValidationError> {
        match self.0.get(key) {
            None => Err(CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v),
        }
    }
}
