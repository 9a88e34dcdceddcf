//! Minimal Rust crate for reading Cloud Foundry service bindings from `VCAP_SERVICES`.
//!
//! The platform injects every bound service into the application environment
//! as a single JSON object. This crate decodes that object and returns the
//! credentials of a service by name.
//!
//! # Features
//!
//! - Typed credentials with well-known fields (`uri`, `hostname`, `port`, ...)
//! - Provider-specific extras kept in [`Credentials::additional()`]
//! - `port` accepted as either a JSON string or a JSON number
//! - Pluggable environment source for testing
//!
//! # Example
//!
//! ```ignore
//! use vcap_services::{extract_credentials, parse_envelope, ServicesError};
//!
//! fn main() -> Result<(), ServicesError> {
//!     // Straight from the process environment
//!     let creds = vcap_services::extract_credentials_from_environment("p-mysql")?;
//!
//!     // Or from text you already have
//!     let envelope = parse_envelope(r#"{"serviceA":[{"credentials":{"uri":"example_uri"}}]}"#)?;
//!     let creds = extract_credentials(&envelope, "serviceA")?;
//!     assert_eq!(creds[0].uri.as_deref(), Some("example_uri"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure Modes
//!
//! | Situation | Error |
//! |-----------|-------|
//! | Variable unset, empty, or malformed JSON | [`ServicesError::Decode`] |
//! | Service name not in the envelope | [`ServicesError::ServiceNotFound`] |
//! | Service present with an empty array | [`ServicesError::NoBindings`] |
//! | Variable set but not valid Unicode | [`ServicesError::EnvRead`] |

mod binding;
mod credentials;
mod env;
mod envelope;
mod error;
mod loader;
mod port;

pub use binding::Binding;
pub use credentials::{Credentials, KNOWN_KEYS};
pub use env::{read_raw_envelope, EnvSource, ProcessEnv, VCAP_SERVICES};
pub use envelope::{extract_credentials, parse_envelope, Envelope};
pub use error::ServicesError;
pub use loader::{extract_credentials_from_environment, services_from_environment, VcapServices};
pub use port::Port;
