use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A collection record key. Always stored and compared as a string; JSON
/// numbers submitted by older clients are coerced on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> de::Visitor<'de> for IdVisitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or numeric record id")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RecordId, E> {
                Ok(RecordId(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RecordId, E> {
                Ok(RecordId(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<RecordId, E> {
                Ok(RecordId(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Generates a fresh id from the current wall clock, millisecond precision.
/// Two generations in the same millisecond would collide on the raw
/// timestamp, so a process-wide watermark bumps repeats forward by one.
pub fn generate() -> RecordId {
    let now = Utc::now().timestamp_millis() as u64;
    let mut last = LAST_ISSUED.load(Ordering::SeqCst);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ISSUED.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return RecordId(candidate.to_string()),
            Err(observed) => last = observed,
        }
    }
}
