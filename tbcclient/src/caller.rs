//! Typed entry point for DBI calls

use crate::classifier::classify;
use crate::config_ext::TbcConfigExt;
use crate::credentials::{CertificateIdentity, Credentials};
use crate::error::Result;
use crate::operation::{OperationDescriptor, SoapRequest};
use crate::transport::{HttpsTransport, SoapTransport};
use std::path::Path;
use tbcconfig::{try_get_config, Config};
use tbcsoap::{build_request_envelope, deserialize_payload, SoapResponse};
use tracing::debug;

/// TBC DBI client
///
/// Holds the credentials and a transport; every call builds its own envelope
/// and shares nothing with other calls, so one caller can serve concurrent
/// tasks.
///
/// # Example
///
/// ```no_run
/// use tbcclient::{GetPaymentOrderStatusRequestIo, TbcSoapCaller};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let caller = TbcSoapCaller::create(
///         "integration_username",
///         "integration_password",
///         "certificate.pfx",
///         "certificate_password",
///     )?;
///
///     let status = caller.call(&GetPaymentOrderStatusRequestIo::new(1632027071)).await?;
///     println!("Order status: {}", status.status);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TbcSoapCaller<T: SoapTransport = HttpsTransport> {
    credentials: Credentials,
    transport: T,
}

impl TbcSoapCaller<HttpsTransport> {
    /// Caller using mutual TLS with the identity's certificate
    pub fn new(identity: CertificateIdentity) -> Self {
        let transport = HttpsTransport::new(&identity);
        Self::with_transport(identity.credentials().clone(), transport)
    }

    /// Validates the four settings and builds a caller
    pub fn create(
        username: &str,
        password: &str,
        certificate_file: impl AsRef<Path>,
        certificate_password: &str,
    ) -> Result<Self> {
        let identity = CertificateIdentity::create(
            username,
            password,
            certificate_file,
            certificate_password,
        )?;
        Ok(Self::new(identity))
    }

    /// Caller built from the global configuration
    ///
    /// An unusable configuration directory is reported as
    /// [`TbcError::Config`](crate::TbcError::Config).
    pub fn from_config() -> Result<Self> {
        let config = try_get_config()?;
        Self::from_config_obj(&config)
    }

    /// Caller built from `accounts.tbc` of the given configuration
    pub fn from_config_obj(config: &Config) -> Result<Self> {
        let identity = config.get_tbc_identity()?;
        let endpoint = config.get_tbc_endpoint();
        debug!("TBC caller for {} using {}", identity.credentials().username(), endpoint);

        let transport = HttpsTransport::new(&identity).with_endpoint(endpoint);
        Ok(Self::with_transport(identity.credentials().clone(), transport))
    }
}

impl<T: SoapTransport> TbcSoapCaller<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Performs `request` and deserializes its response
    pub async fn call<R: SoapRequest>(&self, request: &R) -> Result<R::Response> {
        self.call_descriptor(OperationDescriptor::from_request(request))
            .await
    }

    pub async fn call_descriptor<R: SoapResponse>(
        &self,
        descriptor: OperationDescriptor<R>,
    ) -> Result<R> {
        let body = self.call_raw(&descriptor).await?;
        Ok(deserialize_payload::<R>(&body)?)
    }

    /// Performs the call and returns the success body as received
    ///
    /// # Errors
    ///
    /// - [`TbcError::Envelope`](crate::TbcError::Envelope) before any network activity
    /// - [`TbcError::Transport`](crate::TbcError::Transport) when the exchange fails
    /// - [`TbcError::Fault`](crate::TbcError::Fault) or
    ///   [`TbcError::HttpStatus`](crate::TbcError::HttpStatus) for error statuses
    pub async fn call_raw<R: SoapResponse>(
        &self,
        descriptor: &OperationDescriptor<R>,
    ) -> Result<String> {
        let envelope = build_request_envelope(
            self.credentials.username(),
            self.credentials.password(),
            descriptor.nonce(),
            descriptor.body(),
        )?;

        let action = descriptor.action();
        debug!("TBC {} call", action);

        let response = self
            .transport
            .post(&action.soap_action(), &envelope)
            .await?;
        debug!("TBC {} answered HTTP {}", action, response.status);

        classify(response)
    }
}
