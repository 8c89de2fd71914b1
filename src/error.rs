use serde::{Deserialize, Serialize};

/// Unified error type for all provider adapter operations.
///
/// Variants that originate from a remote session carry a `provider` field
/// identifying the backend. All variants are serializable for structured
/// error reporting.
///
/// No error is retried at this layer: retry and backoff policy belong to the
/// session transport, and a failed retrieval must never be mistaken for a
/// complete one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The requested zone does not exist (or is not visible to the
    /// configured credentials).
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Dot-terminated zone domain that was not found.
        zone: String,
    },

    /// The `(record_type, fqdn)` key targeted by `update`/`remove` has no
    /// remote record.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Wire tag of the missing record.
        record_type: String,
        /// Dot-terminated name of the missing record.
        fqdn: String,
    },

    /// A record type outside the supported set was encountered.
    ///
    /// SOA is not this error; it is recognized zone metadata and skipped
    /// during retrieval.
    UnsupportedRecordType {
        /// The unsupported wire tag.
        record_type: String,
    },

    /// A raw provider value could not be parsed into canonical fields.
    ///
    /// Carries the offending raw value so an operator can locate the
    /// provider-side record. During bulk retrieval this is logged and then
    /// re-raised, aborting the whole retrieval.
    Decode {
        /// Wire tag the value was declared as.
        record_type: String,
        /// The raw wire value that failed to parse.
        raw_value: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Opaque failure from the remote session (network, auth, quota).
    ///
    /// Propagated unmodified; classification and retry are transport
    /// concerns.
    Session {
        /// Provider that produced the error.
        provider: String,
        /// Error details as reported by the session.
        detail: String,
    },
}

impl ProviderError {
    /// Whether this error is expected behavior (absent resources, rejected
    /// input), used for log leveling.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ZoneNotFound { .. }
                | Self::RecordNotFound { .. }
                | Self::UnsupportedRecordType { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZoneNotFound { provider, zone } => {
                write!(f, "[{provider}] Zone '{zone}' not found")
            }
            Self::RecordNotFound {
                provider,
                record_type,
                fqdn,
            } => {
                write!(f, "[{provider}] Record '{fqdn}' ({record_type}) not found")
            }
            Self::UnsupportedRecordType { record_type } => {
                write!(f, "Unsupported record type: {record_type}")
            }
            Self::Decode {
                record_type,
                raw_value,
                detail,
            } => {
                write!(
                    f,
                    "Cannot decode {record_type} value '{raw_value}': {detail}"
                )
            }
            Self::Session { provider, detail } => {
                write!(f, "[{provider}] {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
