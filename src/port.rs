//! Port value that providers emit as either a JSON string or a JSON number.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Number, Value};

/// The `port` field of a credentials payload.
///
/// Keeps the representation the provider used, so `"5432"` and `5432` both
/// read back as `5432` through [`Port::as_u16`] while [`Port::as_text`]
/// returns exactly what was in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Port {
    /// No `port` key, or `port: null`.
    #[default]
    Absent,
    /// Given as a JSON string. Not required to be numeric.
    Text(String),
    /// Given as a JSON number.
    Numeric(Number),
}

impl Port {
    /// Returns `true` if no port was given.
    pub fn is_absent(&self) -> bool {
        matches!(self, Port::Absent)
    }

    /// Integer value of the port, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Port::Absent => None,
            Port::Text(text) => text.parse().ok(),
            Port::Numeric(number) => number.as_i64(),
        }
    }

    /// Port value as a `u16`, if it is an integer in range.
    pub fn as_u16(&self) -> Option<u16> {
        self.as_i64().and_then(|port| u16::try_from(port).ok())
    }

    /// The port exactly as it appeared in the source.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Port::Absent => None,
            Port::Text(text) => Some(text.clone()),
            Port::Numeric(number) => Some(number.to_string()),
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Absent => Ok(()),
            Port::Text(text) => f.write_str(text),
            Port::Numeric(number) => write!(f, "{}", number),
        }
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Port::Numeric(Number::from(port))
    }
}

impl From<&str> for Port {
    fn from(port: &str) -> Self {
        Port::Text(port.to_string())
    }
}

impl<'de> Deserialize<'de> for Port {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Port::Absent),
            Value::String(text) => Ok(Port::Text(text)),
            Value::Number(number) => Ok(Port::Numeric(number)),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a port as string or number",
            )),
        }
    }
}

impl Serialize for Port {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Port::Absent => serializer.serialize_none(),
            Port::Text(text) => serializer.serialize_str(text),
            Port::Numeric(number) => number.serialize(serializer),
        }
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
        _ => de::Unexpected::Other("value"),
    }
}
