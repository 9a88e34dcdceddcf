//! Isolates environment variable access.

use std::collections::HashMap;
use std::env::VarError;

use crate::error::ServicesError;

/// Environment variable the platform places all service bindings in.
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// Source of environment variables.
///
/// `Ok(None)` means the variable is not set. Errors are reserved for a
/// variable that is set but unreadable.
#[cfg_attr(test, mockall::automock)]
pub trait EnvSource {
    fn var(&self, key: &str) -> Result<Option<String>, VarError>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>, VarError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Fixed set of variables, independent of the process environment.
impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<Option<String>, VarError> {
        Ok(self.get(key).cloned())
    }
}

/// Read `key` from `source`, returning empty text if it is unset.
pub(crate) fn read_var(source: &dyn EnvSource, key: &str) -> Result<String, ServicesError> {
    match source.var(key) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => {
            tracing::debug!(var = key, "environment variable not set");
            Ok(String::new())
        }
        Err(source) => Err(ServicesError::EnvRead {
            var: key.to_string(),
            source,
        }),
    }
}

/// Raw `VCAP_SERVICES` text from the process environment.
///
/// Returns an empty string if the variable is unset or not valid Unicode.
pub fn read_raw_envelope() -> String {
    read_var(&ProcessEnv, VCAP_SERVICES).unwrap_or_default()
}
