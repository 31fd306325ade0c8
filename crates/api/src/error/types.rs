//! Error type definitions for identity-layer operations

use thiserror::Error as ThisError;

/// Primary error type for curve classification, key interop and entropy
///
/// Every variant carries enough context to tell a configuration defect
/// (an identifier outside the closed curve set) apart from a runtime or
/// environmental fault (a malformed key, a missing CPU feature).
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A curve kind or curve group identifier outside the supported set
    #[error("Unsupported {context}: {raw}")]
    UnsupportedCurve {
        context: &'static str,
        raw: u32,
    },

    /// A configured curve name outside the supported set
    #[error("Unsupported curve name: {name:?}")]
    UnknownCurveName {
        name: String,
    },

    /// A serialized point does not fit the fixed-capacity point buffer
    #[error("{context}: encoding needs {needed} bytes, buffer holds {capacity}")]
    EncodingOverflow {
        context: &'static str,
        needed: usize,
        capacity: usize,
    },

    /// The receiving provider rejected a point encoding
    #[error("Malformed point: {context}: {message}")]
    MalformedPoint {
        context: &'static str,
        message: String,
    },

    /// Key interop requested for a curve with a single provider
    #[error("No secondary provider for curve {curve}")]
    NoSecondaryProvider {
        curve: &'static str,
    },

    /// A native provider context could not be created
    #[error("[{provider}] context initialisation failed: {message}")]
    ProviderInitFailed {
        provider: &'static str,
        message: String,
    },

    /// A native provider reported an illegal argument
    #[error("[{provider}] illegal argument: {message}")]
    IllegalArgument {
        provider: &'static str,
        message: String,
    },

    /// The host CPU lacks a required hardware random-number feature
    #[error("No support for {missing} on this CPU")]
    EntropyUnavailable {
        missing: &'static str,
    },

    /// The hardware source produced fewer bytes than requested
    #[error("Couldn't create random data: requested {requested} bytes, got {produced}")]
    EntropyExhausted {
        requested: usize,
        produced: usize,
    },

    /// Invalid key material
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Signature rejected or malformed
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },
}

/// Result type for identity-layer operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Whether a caller may retry the failed operation
    ///
    /// Only an entropy underfill is transient. Callers bound their retries,
    /// see `EntropySource::random_with_retry`.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::EntropyExhausted { .. })
    }

    /// Whether the error reflects a build or configuration defect rather than
    /// a fault in the data or the environment
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedCurve { .. }
                | Self::UnknownCurveName { .. }
                | Self::NoSecondaryProvider { .. }
        )
    }

    /// Replace the context of a context-carrying error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedCurve { raw, .. } => Self::UnsupportedCurve { context, raw },
            Self::EncodingOverflow { needed, capacity, .. } => Self::EncodingOverflow {
                context,
                needed,
                capacity,
            },
            Self::MalformedPoint { message, .. } => Self::MalformedPoint { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            other => other,
        }
    }
}
