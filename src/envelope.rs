//! Decoded `VCAP_SERVICES` envelope and credential extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::binding::Binding;
use crate::credentials::Credentials;
use crate::error::ServicesError;

/// Mapping from service name to the bindings listed under it.
///
/// Services whose array is empty are kept, so that an empty service can be
/// told apart from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Envelope {
    services: BTreeMap<String, Vec<Binding>>,
}

impl Envelope {
    /// Names of all services, sorted.
    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// Bindings listed under `service`, or `None` if the key is absent.
    pub fn bindings(&self, service: &str) -> Option<&[Binding]> {
        self.services.get(service).map(Vec::as_slice)
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns `true` if the envelope lists no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// All bindings, across services, that carry `tag`.
    pub fn bindings_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Binding> {
        self.all_bindings().filter(move |binding| binding.has_tag(tag))
    }

    /// All bindings, across services, whose label equals `label`.
    pub fn bindings_with_label<'a>(
        &'a self,
        label: &'a str,
    ) -> impl Iterator<Item = &'a Binding> {
        self.all_bindings()
            .filter(move |binding| binding.label.as_deref() == Some(label))
    }

    /// Consume the envelope and return the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Vec<Binding>> {
        self.services
    }

    fn all_bindings(&self) -> impl Iterator<Item = &Binding> {
        self.services.values().flatten()
    }
}

impl From<BTreeMap<String, Vec<Binding>>> for Envelope {
    fn from(services: BTreeMap<String, Vec<Binding>>) -> Self {
        Self { services }
    }
}

impl FromIterator<(String, Vec<Binding>)> for Envelope {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Binding>)>>(iter: I) -> Self {
        Self {
            services: iter.into_iter().collect(),
        }
    }
}

/// Decode the raw envelope text.
///
/// # Errors
///
/// Returns `ServicesError::Decode` for malformed JSON, a top-level value that
/// is not an object of arrays, a binding that is not an object, or a
/// credentials payload that fails to decode. Empty text is malformed.
pub fn parse_envelope(raw: &str) -> Result<Envelope, ServicesError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    tracing::debug!(services = envelope.len(), "decoded service envelope");
    Ok(envelope)
}

/// Credentials of every binding under `service`, in source order.
///
/// # Errors
///
/// Returns `ServicesError::ServiceNotFound` if `service` is not a key of the
/// envelope, and `ServicesError::NoBindings` if its array is empty.
pub fn extract_credentials(
    envelope: &Envelope,
    service: &str,
) -> Result<Vec<Credentials>, ServicesError> {
    let bindings = envelope
        .bindings(service)
        .ok_or_else(|| ServicesError::ServiceNotFound(service.to_string()))?;
    if bindings.is_empty() {
        return Err(ServicesError::NoBindings(service.to_string()));
    }

    tracing::trace!(service, bindings = bindings.len(), "extracting credentials");
    Ok(bindings
        .iter()
        .map(|binding| binding.credentials.clone())
        .collect())
}
