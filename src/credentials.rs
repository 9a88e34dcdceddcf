//! Credentials payload of a single service binding.

use serde::de::{self, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::port::Port;

/// JSON keys decoded into the fixed fields of [`Credentials`].
///
/// Everything else in a credentials object lands in
/// [`Credentials::additional`].
pub const KNOWN_KEYS: [&str; 12] = [
    "uri",
    "jdbcUrl",
    "http_api_uri",
    "licenseKey",
    "client_secret",
    "client_id",
    "access_token_uri",
    "hostname",
    "username",
    "password",
    "name",
    "port",
];

/// Connection and authentication details of one service binding.
///
/// Well-known fields are typed. Any other key of the source object is kept
/// verbatim in `additional`, which is `None` when there are no such keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub uri: Option<String>,
    pub jdbc_url: Option<String>,
    pub api_uri: Option<String>,
    pub license_key: Option<String>,
    pub client_secret: Option<String>,
    pub client_id: Option<String>,
    pub access_token_uri: Option<String>,
    pub hostname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub port: Port,
    pub additional: Option<Map<String, Value>>,
}

/// Fixed-schema view of a credentials object, keyed by JSON name.
#[derive(Deserialize)]
struct KnownFields {
    uri: Option<String>,
    #[serde(rename = "jdbcUrl")]
    jdbc_url: Option<String>,
    #[serde(rename = "http_api_uri")]
    api_uri: Option<String>,
    #[serde(rename = "licenseKey")]
    license_key: Option<String>,
    client_secret: Option<String>,
    client_id: Option<String>,
    access_token_uri: Option<String>,
    hostname: Option<String>,
    username: Option<String>,
    password: Option<String>,
    name: Option<String>,
    #[serde(default)]
    port: Port,
}

impl Credentials {
    /// Look up a provider-specific field that is not one of [`KNOWN_KEYS`].
    pub fn additional(&self, key: &str) -> Option<&Value> {
        self.additional.as_ref().and_then(|extra| extra.get(key))
    }

    fn from_object(mut object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let known = KnownFields::deserialize(Value::Object(object.clone()))?;

        for key in KNOWN_KEYS {
            object.shift_remove(key);
        }
        let additional = if object.is_empty() {
            None
        } else {
            Some(object)
        };

        Ok(Self {
            uri: known.uri,
            jdbc_url: known.jdbc_url,
            api_uri: known.api_uri,
            license_key: known.license_key,
            client_secret: known.client_secret,
            client_id: known.client_id,
            access_token_uri: known.access_token_uri,
            hostname: known.hostname,
            username: known.username,
            password: known.password,
            name: known.name,
            port: known.port,
            additional,
        })
    }

    fn known_values(&self) -> [(&'static str, Option<&String>); 11] {
        [
            ("uri", self.uri.as_ref()),
            ("jdbcUrl", self.jdbc_url.as_ref()),
            ("http_api_uri", self.api_uri.as_ref()),
            ("licenseKey", self.license_key.as_ref()),
            ("client_secret", self.client_secret.as_ref()),
            ("client_id", self.client_id.as_ref()),
            ("access_token_uri", self.access_token_uri.as_ref()),
            ("hostname", self.hostname.as_ref()),
            ("username", self.username.as_ref()),
            ("password", self.password.as_ref()),
            ("name", self.name.as_ref()),
        ]
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<Map<String, Value>>::deserialize(deserializer)? {
            Some(object) => Credentials::from_object(object).map_err(de::Error::custom),
            None => Ok(Credentials::default()),
        }
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.known_values() {
            if let Some(value) = value {
                map.serialize_entry(key, value)?;
            }
        }
        if !self.port.is_absent() {
            map.serialize_entry("port", &self.port)?;
        }
        if let Some(extra) = &self.additional {
            for (key, value) in extra {
                if !KNOWN_KEYS.contains(&key.as_str()) {
                    map.serialize_entry(key, value)?;
                }
            }
        }
        map.end()
    }
}
