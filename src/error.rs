//! Error types for service binding lookups.

use std::env::VarError;

use thiserror::Error;

/// Errors that can occur when reading service bindings.
#[derive(Debug, Error)]
pub enum ServicesError {
    /// The envelope text is not valid JSON of the expected shape.
    ///
    /// An unset or empty environment variable also ends up here, since
    /// empty text is not valid JSON.
    #[error("failed to decode VCAP_SERVICES: {0}")]
    Decode(#[from] serde_json::Error),

    /// The requested service name is not a key in the envelope.
    #[error("service {0} does not exist")]
    ServiceNotFound(String),

    /// The service name is present but has no bindings.
    #[error("service {0} has no bindings")]
    NoBindings(String),

    /// The environment variable is set but could not be read.
    #[error("failed to read environment variable {var}: {source}")]
    EnvRead {
        var: String,
        #[source]
        source: VarError,
    },
}

impl ServicesError {
    /// The service name this error refers to, if any.
    pub fn service_name(&self) -> Option<&str> {
        match self {
            ServicesError::ServiceNotFound(name) | ServicesError::NoBindings(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ServicesError::ServiceNotFound("serviceB".to_string()).to_string(),
            "service serviceB does not exist"
        );
        assert_eq!(
            ServicesError::NoBindings("serviceA".to_string()).to_string(),
            "service serviceA has no bindings"
        );
        assert_eq!(
            ServicesError::EnvRead {
                var: "VCAP_SERVICES".to_string(),
                source: VarError::NotPresent,
            }
            .to_string(),
            "failed to read environment variable VCAP_SERVICES: environment variable not found"
        );
    }

    #[test]
    fn test_decode_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let err = ServicesError::from(err);
        assert!(err
            .to_string()
            .starts_with("failed to decode VCAP_SERVICES: EOF while parsing"));
    }

    #[test]
    fn test_service_name() {
        assert_eq!(
            ServicesError::ServiceNotFound("a".to_string()).service_name(),
            Some("a")
        );
        assert_eq!(
            ServicesError::NoBindings("b".to_string()).service_name(),
            Some("b")
        );
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ServicesError::from(err).service_name(), None);
    }
}
