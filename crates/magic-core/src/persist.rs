//! Versioned persistence
//!
//! Values are written with a small header naming the format version and the
//! kind of value stored, so a file is only ever decoded into the type that
//! wrote it. Two encodings are available: a compact bincode one and a
//! readable JSON one.

use std::{fs, path::Path};

use bincode::{DefaultOptions, Options};
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

use crate::{computer::Computer, value::Value};

/// Leading bytes of every binary file
pub const MAGIC: [u8; 4] = *b"MGPK";

/// Current format version
pub const FORMAT_VERSION: u16 = 1;

/// A plain string-keyed mapping, kept in insertion order
pub type Record = IndexMap<String, Value>;

/// Persistence errors
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary encoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Not a file written by this codec
    #[error("Bad magic bytes: {found:?}")]
    BadMagic { found: [u8; 4] },

    /// Written by a newer or older codec
    #[error("Unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },

    /// Holds a different kind of value than requested
    #[error("Kind mismatch: expected '{expected}', found '{found}'")]
    KindMismatch { expected: String, found: String },

    /// JSON has no spelling for NaN or infinity
    #[error("Cannot encode non-finite float as JSON in '{kind}'")]
    NonFiniteFloat { kind: String },
}

/// A value that can be persisted
pub trait Persist: Serialize + DeserializeOwned {
    /// Tag recorded in the header and checked on load
    const KIND: &'static str;

    /// Whether any float inside is NaN or infinite
    fn has_non_finite_float(&self) -> bool {
        false
    }
}

impl Persist for Computer {
    const KIND: &'static str = "computer";
}

impl Persist for Record {
    const KIND: &'static str = "record";

    fn has_non_finite_float(&self) -> bool {
        self.values().any(Value::has_non_finite_float)
    }
}

/// On-disk encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Binary,
    Json,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Binary => "pickle",
            Format::Json => "json",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" | "pickle" => Ok(Format::Binary),
            "json" => Ok(Format::Json),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Binary => write!(f, "binary"),
            Format::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    magic: [u8; 4],
    version: u16,
    kind: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope<T> {
    format_version: u16,
    kind: String,
    payload: T,
}

/// Fixed-width little-endian integers, the layout `bincode::serialize` uses
fn binary_options() -> impl Options {
    DefaultOptions::new().with_fixint_encoding()
}

fn check_header(version: u16, kind: &str, expected_kind: &str) -> Result<(), PersistError> {
    if version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }
    if kind != expected_kind {
        return Err(PersistError::KindMismatch {
            expected: expected_kind.to_string(),
            found: kind.to_string(),
        });
    }
    Ok(())
}

/// Encode `value` in the given format
pub fn encode<T: Persist>(value: &T, format: Format) -> Result<Vec<u8>, PersistError> {
    match format {
        Format::Binary => {
            let header = Header {
                magic: MAGIC,
                version: FORMAT_VERSION,
                kind: T::KIND.to_string(),
            };
            let mut bytes = binary_options().serialize(&header)?;
            bytes.extend(binary_options().serialize(value)?);
            Ok(bytes)
        }
        Format::Json => {
            if value.has_non_finite_float() {
                return Err(PersistError::NonFiniteFloat {
                    kind: T::KIND.to_string(),
                });
            }
            let envelope = JsonEnvelope {
                format_version: FORMAT_VERSION,
                kind: T::KIND.to_string(),
                payload: value,
            };
            Ok(serde_json::to_vec_pretty(&envelope)?)
        }
    }
}

/// Decode a value previously produced by [`encode`]
pub fn decode<T: Persist>(bytes: &[u8], format: Format) -> Result<T, PersistError> {
    match format {
        Format::Binary => {
            // Length prefixes can never claim more than the input holds
            let limit = bytes.len() as u64;
            let header: Header = binary_options()
                .with_limit(limit)
                .allow_trailing_bytes()
                .deserialize(bytes)?;
            if header.magic != MAGIC {
                return Err(PersistError::BadMagic {
                    found: header.magic,
                });
            }
            check_header(header.version, &header.kind, T::KIND)?;
            let header_len = binary_options().serialized_size(&header)? as usize;
            let payload = bytes.get(header_len..).unwrap_or_default();
            Ok(binary_options().with_limit(limit).deserialize(payload)?)
        }
        Format::Json => {
            let envelope: JsonEnvelope<serde_json::Value> = serde_json::from_slice(bytes)?;
            check_header(envelope.format_version, &envelope.kind, T::KIND)?;
            Ok(serde_json::from_value(envelope.payload)?)
        }
    }
}

/// Write `value` to `path`, replacing any existing file
pub fn dump<T: Persist>(value: &T, path: impl AsRef<Path>, format: Format) -> Result<(), PersistError> {
    let path = path.as_ref();
    let bytes = encode(value, format)?;
    fs::write(path, &bytes)?;
    info!(
        path = %path.display(),
        kind = T::KIND,
        %format,
        bytes = bytes.len(),
        "saved value"
    );
    Ok(())
}

/// Read a value of type `T` back from `path`
pub fn load<T: Persist>(path: impl AsRef<Path>, format: Format) -> Result<T, PersistError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let value = decode(&bytes, format)?;
    info!(
        path = %path.display(),
        kind = T::KIND,
        %format,
        bytes = bytes.len(),
        "loaded value"
    );
    Ok(value)
}
