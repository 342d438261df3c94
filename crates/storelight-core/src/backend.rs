//! Backend capability probe.
//!
//! The status probe never talks to the SDK singleton directly — it asks a
//! [`BackendProbe`], so tests can substitute fixed responses.

use crate::error::CoreError;

/// Capability questions about the hosted backend.
pub trait BackendProbe {
    /// Whether connection credentials/config are present.
    fn is_configured(&self) -> bool;

    /// Whether the backend client is initialized and reachable in
    /// principle. Fallible: a failure here is an unanticipated probe error
    /// and is handled by the caller's outer classification.
    fn is_available(&self) -> Result<bool, CoreError>;
}

/// Production probe, wired from configuration and client construction.
#[derive(Debug, Clone, Copy)]
pub struct LiveBackend {
    configured: bool,
    available: bool,
}

impl LiveBackend {
    /// `configured`: credentials were present in config.
    /// `available`: a catalog client was successfully built from them.
    pub fn new(configured: bool, available: bool) -> Self {
        Self {
            configured,
            available,
        }
    }
}

impl BackendProbe for LiveBackend {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn is_available(&self) -> Result<bool, CoreError> {
        Ok(self.available)
    }
}
