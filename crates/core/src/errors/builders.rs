//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create a missing capability error for the element at `index`
    #[must_use]
    pub fn missing_capability(name: impl Into<String>, index: usize) -> Self {
        Error::MissingCapability {
            name: name.into(),
            index,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a runtime error
    #[must_use]
    pub fn runtime(message: impl Into<String>) -> Self {
        Error::Runtime {
            message: message.into(),
        }
    }
}
