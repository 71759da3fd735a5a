//! Error types for the TBC DBI client

use tbcsoap::{EnvelopeError, PayloadError, SoapFault};

/// Result type alias for TBC operations
pub type Result<T> = std::result::Result<T, TbcError>;

/// Failures of the HTTPS exchange itself
///
/// Every variant carries the rendered error source chain.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The PKCS#12 file could not be read or decoded with its password
    #[error("Cannot load client certificate {path}: {reason}")]
    CertificateLoad { path: String, reason: String },

    /// TLS client construction failed
    #[error("Cannot build HTTPS client: {0}")]
    Client(String),

    /// Connection, TLS handshake or send failure
    #[error("Request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },

    /// The response body could not be read
    #[error("Cannot read response body: {0}")]
    Body(String),
}

impl TransportError {
    pub(crate) fn request(endpoint: &str, error: &reqwest::Error) -> Self {
        Self::Request {
            endpoint: endpoint.to_string(),
            reason: error_chain(error),
        }
    }
}

/// Renders an error followed by all of its sources
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Errors returned by every client operation
#[derive(Debug, thiserror::Error)]
pub enum TbcError {
    /// Invalid credentials or certificate settings
    #[error("Invalid client settings: {0}")]
    Construction(String),

    /// The request envelope is not well-formed
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// SOAP fault returned by the service
    #[error("{0}")]
    Fault(SoapFault),

    /// Non-success HTTP status without a parseable fault
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response does not match the expected document
    #[error("Cannot deserialize response: {0}")]
    Deserialization(String),

    /// Aggregated data disagrees with the counts declared by the service
    #[error("Received {received} records, expected {expected}")]
    Integrity { expected: u64, received: u64 },

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl TbcError {
    /// The SOAP fault, when the service returned one
    pub fn fault(&self) -> Option<&SoapFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Case-insensitive fault code check, false for non-fault errors
    pub fn is_fault_code(&self, code: &str) -> bool {
        self.fault().is_some_and(|fault| fault.is_fault_code(code))
    }
}

impl From<PayloadError> for TbcError {
    fn from(error: PayloadError) -> Self {
        match error {
            PayloadError::Fault(fault) => Self::Fault(fault),
            other => Self::Deserialization(other.to_string()),
        }
    }
}

impl From<tbctypes::TypesError> for TbcError {
    fn from(error: tbctypes::TypesError) -> Self {
        Self::Construction(error.to_string())
    }
}
