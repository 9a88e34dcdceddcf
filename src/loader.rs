//! VcapServices struct, the environment-backed entry point.

use std::fmt;

use crate::credentials::Credentials;
use crate::env::{read_var, EnvSource, ProcessEnv, VCAP_SERVICES};
use crate::envelope::{extract_credentials, parse_envelope, Envelope};
use crate::error::ServicesError;

/// Reads service bindings from an environment variable.
///
/// # Example
///
/// ```ignore
/// use vcap_services::{ServicesError, VcapServices};
///
/// fn main() -> Result<(), ServicesError> {
///     let creds = VcapServices::new().credentials("p-mysql")?;
///     println!("{:?}", creds[0].uri);
///     Ok(())
/// }
/// ```
pub struct VcapServices {
    source: Box<dyn EnvSource>,
    variable: String,
}

impl VcapServices {
    /// Read `VCAP_SERVICES` from the process environment.
    pub fn new() -> Self {
        Self {
            source: Box::new(ProcessEnv),
            variable: VCAP_SERVICES.to_string(),
        }
    }

    /// Read from a different environment source.
    ///
    /// This is primarily useful for testing without touching the process
    /// environment.
    pub fn with_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Read the envelope from a variable other than `VCAP_SERVICES`.
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Name of the variable the envelope is read from.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns `true` if the variable is set, even if it is empty.
    ///
    /// Parsing does not distinguish an unset variable from malformed text;
    /// call this first when "not configured" needs separate handling.
    ///
    /// # Errors
    ///
    /// Returns `ServicesError::EnvRead` if the variable is set but unreadable.
    pub fn is_configured(&self) -> Result<bool, ServicesError> {
        self.source
            .var(&self.variable)
            .map(|value| value.is_some())
            .map_err(|source| ServicesError::EnvRead {
                var: self.variable.clone(),
                source,
            })
    }

    /// Raw envelope text, empty if the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns `ServicesError::EnvRead` if the variable is set but unreadable.
    pub fn raw(&self) -> Result<String, ServicesError> {
        read_var(self.source.as_ref(), &self.variable)
    }

    /// Decode all services from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ServicesError::Decode` if the variable is unset, empty, or
    /// malformed.
    pub fn services(&self) -> Result<Envelope, ServicesError> {
        parse_envelope(&self.raw()?)
    }

    /// Credentials of every binding of `service`.
    ///
    /// # Errors
    ///
    /// Returns the first failure of reading, decoding, or extracting.
    pub fn credentials(&self, service: &str) -> Result<Vec<Credentials>, ServicesError> {
        extract_credentials(&self.services()?, service)
    }
}

impl Default for VcapServices {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VcapServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VcapServices")
            .field("variable", &self.variable)
            .finish_non_exhaustive()
    }
}

/// Decode all services from `VCAP_SERVICES` in the process environment.
///
/// # Errors
///
/// See [`VcapServices::services`].
pub fn services_from_environment() -> Result<Envelope, ServicesError> {
    VcapServices::new().services()
}

/// Credentials of `service` from `VCAP_SERVICES` in the process environment.
///
/// # Errors
///
/// See [`VcapServices::credentials`].
pub fn extract_credentials_from_environment(
    service: &str,
) -> Result<Vec<Credentials>, ServicesError> {
    VcapServices::new().credentials(service)
}

#[cfg(test)]
mod tests {
    use std::env::VarError;
    use std::ffi::OsString;

    use mockall::predicate::eq;

    use crate::env::MockEnvSource;

    use super::*;

    fn with_value(value: Option<&'static str>) -> VcapServices {
        let mut env = MockEnvSource::new();
        env.expect_var()
            .returning(move |_| Ok(value.map(str::to_string)));
        VcapServices::new().with_source(env)
    }

    #[test]
    fn test_default_variable() {
        assert_eq!(VcapServices::new().variable(), VCAP_SERVICES);
        assert_eq!(VcapServices::default().variable(), VCAP_SERVICES);
    }

    #[test]
    fn test_with_variable() {
        let services = VcapServices::new().with_variable("MY_SERVICES");
        assert_eq!(services.variable(), "MY_SERVICES");
    }

    #[test]
    fn test_credentials() {
        let services = with_value(Some(
            r#"{"serviceA":[{"credentials":{"uri":"example_uri"}}]}"#,
        ));
        let creds = services.credentials("serviceA").unwrap();
        assert_eq!(creds.len(), 1);
        assert_eq!(creds[0].uri.as_deref(), Some("example_uri"));
    }

    #[test]
    fn test_unset_is_decode_error() {
        let services = with_value(None);
        assert!(!services.is_configured().unwrap());
        assert_eq!(services.raw().unwrap(), "");
        assert!(matches!(
            services.credentials("serviceA"),
            Err(ServicesError::Decode(_))
        ));
    }

    #[test]
    fn test_set_but_empty_is_configured() {
        let services = with_value(Some(""));
        assert!(services.is_configured().unwrap());
        assert!(matches!(services.services(), Err(ServicesError::Decode(_))));
    }

    #[test]
    fn test_env_read_error_propagates() {
        let mut env = MockEnvSource::new();
        env.expect_var()
            .returning(|_| Err(VarError::NotUnicode(OsString::from("x"))));
        let services = VcapServices::new().with_source(env);

        assert!(matches!(
            services.credentials("serviceA"),
            Err(ServicesError::EnvRead { .. })
        ));
        assert!(services.is_configured().is_err());
    }

    #[test]
    fn test_reads_configured_variable() {
        let mut env = MockEnvSource::new();
        env.expect_var()
            .with(eq("MY_SERVICES"))
            .returning(|_| Ok(Some(r#"{"serviceA":[]}"#.to_string())));
        let services = VcapServices::new()
            .with_source(env)
            .with_variable("MY_SERVICES");

        assert!(matches!(
            services.credentials("serviceA"),
            Err(ServicesError::NoBindings(_))
        ));
    }

    #[test]
    fn test_debug_hides_source() {
        let debug = format!("{:?}", VcapServices::new());
        assert_eq!(debug, r#"VcapServices { variable: "VCAP_SERVICES", .. }"#);
    }
}
