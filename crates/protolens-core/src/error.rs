//! Property access errors

/// Errors raised while reading property values
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// A getter failed while its property value was being read
    #[error("property access failed for key `{key}`: {message}")]
    AccessFailed {
        /// String form of the key whose read failed
        key: String,
        /// Failure reported by the accessor
        message: String,
    },
}

impl PropertyError {
    /// Convenience constructor for accessor failures
    pub fn access_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AccessFailed {
            key: key.into(),
            message: message.into(),
        }
    }
}
