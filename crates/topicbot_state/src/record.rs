//! Encoding of the durable record.
//!
//! Written as `{"cooldown": "2024-05-01T12:00:00.000000"}` (or `null`), with
//! the separators and naive UTC timestamps of files produced by earlier
//! deployments, so either side can read the other's record.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use topicbot_core::CooldownState;
use topicbot_error::{StorageError, StorageErrorKind, StorageResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Serialize, Deserialize)]
struct CooldownRecord {
    cooldown: Option<String>,
}

/// Writes `": "` between keys and values and `", "` between entries.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Render `state` as the record file content.
///
/// # Errors
///
/// Returns error if serialization fails.
///
/// # Examples
///
/// ```
/// use topicbot_core::CooldownState;
/// use topicbot_state::encode_record;
///
/// assert_eq!(encode_record(&CooldownState::open()).unwrap(), r#"{"cooldown": null}"#);
/// ```
pub fn encode_record(state: &CooldownState) -> StorageResult<String> {
    let record = CooldownRecord {
        cooldown: state
            .deadline()
            .map(|deadline| deadline.naive_utc().format(TIMESTAMP_FORMAT).to_string()),
    };

    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
    record
        .serialize(&mut serializer)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
    String::from_utf8(buffer)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))
}

/// Parse record file content.
///
/// Accepts RFC 3339 timestamps and naive ones (read as UTC), with or without
/// fractional seconds. Extra keys are ignored.
///
/// # Errors
///
/// Returns a description of what is wrong with the content.
pub fn decode_record(content: &str) -> Result<CooldownState, String> {
    let record: CooldownRecord =
        serde_json::from_str(content).map_err(|e| format!("malformed record: {}", e))?;
    match record.cooldown {
        None => Ok(CooldownState::open()),
        Some(raw) => parse_timestamp(&raw)
            .map(CooldownState::until)
            .ok_or_else(|| format!("unrecognised timestamp: {:?}", raw)),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
