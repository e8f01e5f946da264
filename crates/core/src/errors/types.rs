//! Core error type definitions

/// Result type alias for underbar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for underbar operations using thiserror
///
/// Most combinators never fail: "no result" cases are reported with sentinel
/// values (`None`). The variants here cover the failures that do propagate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `invoke` was asked for a named capability the element does not expose
    MissingCapability { name: String, index: usize },

    /// Configuration errors
    Configuration { message: String },

    /// JSON deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// No async runtime was available to schedule work on
    Runtime { message: String },
}
