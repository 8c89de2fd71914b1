//! Field codec: pure, type-indexed mapping between canonical record data and
//! provider wire values.
//!
//! Name-valued fields are dot-terminated on the wire and dot-stripped in
//! canonical form (SRV `target` keeps its dot on both sides). MX and SRV
//! priority travels either embedded in the value string or as a separate
//! side-channel attribute, depending on provider convention; decoding
//! accepts both shapes and always normalizes to the split canonical fields.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::types::{RecordData, RecordType};

/// A provider wire value: the primary value string plus the optional
/// side-channel priority attribute some providers use for MX/SRV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireValue {
    /// The primary value string.
    pub value: String,
    /// Side-channel priority, when not embedded in `value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl WireValue {
    /// A wire value with no side-channel priority.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            priority: None,
        }
    }
}

// ============ Name normalization ============

/// Appends the trailing dot if `name` lacks one.
#[must_use]
pub fn ensure_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Removes the trailing dot(s) from `name`.
#[must_use]
pub fn strip_trailing_dot(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

// ============ Record type tags ============

/// Parses a wire tag into a [`RecordType`].
///
/// Rejects anything outside the supported set with
/// [`ProviderError::UnsupportedRecordType`]; an unrecognized type must
/// signal a translation failure, never be guessed at.
pub fn parse_record_type(record_type: &str) -> Result<RecordType> {
    match record_type.to_uppercase().as_str() {
        "A" => Ok(RecordType::A),
        "AAAA" => Ok(RecordType::Aaaa),
        "ALIAS" => Ok(RecordType::Alias),
        "CNAME" => Ok(RecordType::Cname),
        "MX" => Ok(RecordType::Mx),
        "NS" => Ok(RecordType::Ns),
        "SPF" => Ok(RecordType::Spf),
        "TXT" => Ok(RecordType::Txt),
        "SRV" => Ok(RecordType::Srv),
        _ => Err(ProviderError::UnsupportedRecordType {
            record_type: record_type.to_string(),
        }),
    }
}

// ============ Encoding ============

/// Encodes canonical record data into its provider wire value.
///
/// Total over every supported type. Names get their wire trailing dot
/// re-appended; SRV packs the space-joined 4-tuple in the fixed order
/// `priority weight port target`. The priority side-channel is never used
/// on encode — the embedded shape is what every value-oriented provider
/// accepts.
#[must_use]
pub fn encode(data: &RecordData) -> WireValue {
    let value = match data {
        RecordData::A { address } | RecordData::AAAA { address } => address.clone(),
        RecordData::ALIAS { alias } => ensure_trailing_dot(alias),
        RecordData::CNAME { cname } => ensure_trailing_dot(cname),
        RecordData::MX {
            preference,
            exchange,
        } => format!("{preference} {}", ensure_trailing_dot(exchange)),
        RecordData::NS { nsdname } => ensure_trailing_dot(nsdname),
        RecordData::SPF { txtdata } | RecordData::TXT { txtdata } => txtdata.clone(),
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
        } => format!(
            "{priority} {weight} {port} {}",
            ensure_trailing_dot(target)
        ),
    };
    WireValue::plain(value)
}

// ============ Decoding ============

fn decode_err(record_type: RecordType, raw_value: &str, detail: impl Into<String>) -> ProviderError {
    ProviderError::Decode {
        record_type: record_type.as_str().to_string(),
        raw_value: raw_value.to_string(),
        detail: detail.into(),
    }
}

fn parse_u16(record_type: RecordType, raw_value: &str, field: &str, name: &str) -> Result<u16> {
    field
        .parse()
        .map_err(|_| decode_err(record_type, raw_value, format!("invalid {name}: '{field}'")))
}

/// Decodes a provider wire value into canonical record data.
///
/// `priority` carries the side-channel attribute when the provider reports
/// MX/SRV priority outside the value string; pass `None` for the embedded
/// shape. The inverse of [`encode`]:
/// `decode(t, &encode(r).value, None)` reproduces `r` for every
/// constructible canonical record.
///
/// # Errors
///
/// [`ProviderError::Decode`] on malformed composite strings, non-numeric
/// preference/priority/weight/port fields, or invalid A/AAAA address
/// literals.
pub fn decode(record_type: RecordType, value: &str, priority: Option<u16>) -> Result<RecordData> {
    match record_type {
        RecordType::A => {
            value
                .parse::<Ipv4Addr>()
                .map_err(|_| decode_err(record_type, value, "not an IPv4 address"))?;
            Ok(RecordData::A {
                address: value.to_string(),
            })
        }
        RecordType::Aaaa => {
            value
                .parse::<Ipv6Addr>()
                .map_err(|_| decode_err(record_type, value, "not an IPv6 address"))?;
            Ok(RecordData::AAAA {
                address: value.to_string(),
            })
        }
        RecordType::Alias => Ok(RecordData::ALIAS {
            alias: strip_trailing_dot(value),
        }),
        RecordType::Cname => Ok(RecordData::CNAME {
            cname: strip_trailing_dot(value),
        }),
        RecordType::Mx => match priority {
            Some(preference) => Ok(RecordData::MX {
                preference,
                exchange: strip_trailing_dot(value.trim()),
            }),
            None => {
                let (preference, exchange) = value.trim().split_once(' ').ok_or_else(|| {
                    decode_err(record_type, value, "expected 'preference exchange'")
                })?;
                Ok(RecordData::MX {
                    preference: parse_u16(record_type, value, preference, "preference")?,
                    exchange: strip_trailing_dot(exchange.trim()),
                })
            }
        },
        RecordType::Ns => Ok(RecordData::NS {
            nsdname: strip_trailing_dot(value),
        }),
        RecordType::Spf => Ok(RecordData::SPF {
            txtdata: value.to_string(),
        }),
        RecordType::Txt => Ok(RecordData::TXT {
            txtdata: value.to_string(),
        }),
        RecordType::Srv => {
            let parts: Vec<&str> = value.split_whitespace().collect();
            match (priority, parts.as_slice()) {
                // Side-channel priority: the value holds the remaining triple.
                (Some(priority), [weight, port, target]) => Ok(RecordData::SRV {
                    priority,
                    weight: parse_u16(record_type, value, weight, "weight")?,
                    port: parse_u16(record_type, value, port, "port")?,
                    target: ensure_trailing_dot(target),
                }),
                (None, [priority, weight, port, target]) => Ok(RecordData::SRV {
                    priority: parse_u16(record_type, value, priority, "priority")?,
                    weight: parse_u16(record_type, value, weight, "weight")?,
                    port: parse_u16(record_type, value, port, "port")?,
                    target: ensure_trailing_dot(target),
                }),
                (Some(_), _) => Err(decode_err(
                    record_type,
                    value,
                    "expected 'weight port target'",
                )),
                (None, _) => Err(decode_err(
                    record_type,
                    value,
                    "expected 'priority weight port target'",
                )),
            }
        }
    }
}
