//! HTTPS exchange with the DBI endpoint

use crate::credentials::CertificateIdentity;
use crate::error::{error_chain, TransportError};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::tls::{Identity, Version};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::path::{Path, PathBuf};
use tbcsoap::RequestEnvelope;
use tracing::debug;

/// Default DBI endpoint
pub const DEFAULT_ENDPOINT: &str = "https://secdbi.tbconline.ge/dbi/dbiService";

/// Content type of every request
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Status and body of an HTTP response, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends one envelope and returns the raw answer
///
/// Non-success HTTP statuses are returned as [`RawResponse`]s; only failures
/// to exchange at all are errors.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    async fn post(
        &self,
        soap_action: &str,
        envelope: &RequestEnvelope,
    ) -> Result<RawResponse, TransportError>;
}

/// Mutual-TLS transport using the `.pfx` client certificate
///
/// The certificate is read and a new client built for every call, so no
/// connection outlives its request.
#[derive(Clone)]
pub struct HttpsTransport {
    certificate_file: PathBuf,
    certificate_password: String,
    endpoint: String,
}

impl HttpsTransport {
    pub fn new(identity: &CertificateIdentity) -> Self {
        Self {
            certificate_file: identity.certificate_file().to_path_buf(),
            certificate_password: identity.certificate_password().to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn load_identity(&self) -> Result<Identity, TransportError> {
        let path = self.certificate_file.display().to_string();

        let der = tokio::fs::read(&self.certificate_file)
            .await
            .map_err(|e| TransportError::CertificateLoad {
                path: path.clone(),
                reason: error_chain(&e),
            })?;

        Identity::from_pkcs12_der(&der, &self.certificate_password).map_err(|e| {
            TransportError::CertificateLoad {
                path,
                reason: error_chain(&e),
            }
        })
    }

    async fn build_client(&self) -> Result<Client, TransportError> {
        let identity = self.load_identity().await?;

        Client::builder()
            .use_native_tls()
            .identity(identity)
            .min_tls_version(Version::TLS_1_2)
            .max_tls_version(Version::TLS_1_2)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| TransportError::Client(error_chain(&e)))
    }

    pub fn certificate_file(&self) -> &Path {
        &self.certificate_file
    }
}

impl fmt::Debug for HttpsTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpsTransport")
            .field("certificate_file", &self.certificate_file)
            .field("certificate_password", &"***")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl SoapTransport for HttpsTransport {
    async fn post(
        &self,
        soap_action: &str,
        envelope: &RequestEnvelope,
    ) -> Result<RawResponse, TransportError> {
        let client = self.build_client().await?;
        send_envelope(&client, &self.endpoint, soap_action, envelope).await
    }
}

/// Single POST of `envelope` to `endpoint` with the given client
pub(crate) async fn send_envelope(
    client: &Client,
    endpoint: &str,
    soap_action: &str,
    envelope: &RequestEnvelope,
) -> Result<RawResponse, TransportError> {
    debug!("POST {} (SOAPAction {})", endpoint, soap_action);

    let action = HeaderValue::from_str(soap_action).map_err(|e| TransportError::Request {
        endpoint: endpoint.to_string(),
        reason: format!("invalid SOAPAction header: {}", e),
    })?;

    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
        .header("SOAPAction", action)
        .body(envelope.as_str().to_string())
        .send()
        .await
        .map_err(|e| TransportError::request(endpoint, &e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Body(error_chain(&e)))?;

    debug!("{} answered {} ({} bytes)", endpoint, status, body.len());

    Ok(RawResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tbcsoap::build_request_envelope;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn envelope() -> RequestEnvelope {
        build_request_envelope(
            "user",
            "pass",
            "nonce-1",
            concat!(
                "<myg:GetPaymentOrderStatusRequestIo>",
                "<myg:singlePaymentId>7</myg:singlePaymentId>",
                "</myg:GetPaymentOrderStatusRequestIo>"
            ),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_post_sends_soap_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/dbi/dbiService"))
            .and(header("content-type", SOAP_CONTENT_TYPE))
            .and(header(
                "SOAPAction",
                "http://www.mygemini.com/schemas/mygemini/GetPaymentOrderStatus",
            ))
            .and(body_string_contains("<wsse:Nonce>nonce-1</wsse:Nonce>"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<ok/>"))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}/dbi/dbiService", server.uri());
        let response = send_envelope(
            &Client::new(),
            &endpoint,
            "http://www.mygemini.com/schemas/mygemini/GetPaymentOrderStatus",
            &envelope(),
        )
        .await
        .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "<ok/>");
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("fault body"))
            .mount(&server)
            .await;

        let response = send_envelope(&Client::new(), &server.uri(), "x", &envelope())
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "fault body");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let endpoint = "http://127.0.0.1:9/dbi";
        let result = send_envelope(&Client::new(), endpoint, "x", &envelope()).await;
        assert!(matches!(result, Err(TransportError::Request { .. })));
    }

    #[tokio::test]
    async fn test_missing_certificate_file() {
        let identity =
            CertificateIdentity::create("user", "pass", "/nonexistent/client.pfx", "pfx").unwrap();
        let transport = HttpsTransport::new(&identity);
        assert_eq!(transport.endpoint(), DEFAULT_ENDPOINT);

        match transport.post("x", &envelope()).await {
            Err(TransportError::CertificateLoad { path, .. }) => {
                assert_eq!(path, "/nonexistent/client.pfx")
            }
            other => panic!("expected certificate error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_certificate_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("client.pfx");
        std::fs::File::create(&file)
            .unwrap()
            .write_all(b"not a pkcs12 archive")
            .unwrap();

        let identity = CertificateIdentity::create("user", "pass", &file, "pfx").unwrap();
        let transport = HttpsTransport::new(&identity).with_endpoint("http://127.0.0.1:9/dbi");

        assert!(matches!(
            transport.post("x", &envelope()).await,
            Err(TransportError::CertificateLoad { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let identity =
            CertificateIdentity::create("user", "pass", "client.pfx", "pfx-secret").unwrap();
        let transport = HttpsTransport::new(&identity);

        let debug = format!("{:?}", transport);
        assert!(debug.contains("client.pfx"));
        assert!(!debug.contains("pfx-secret"));

        let debug = format!("{:?}", crate::TbcSoapCaller::new(identity));
        assert!(!debug.contains("pfx-secret"));
        assert!(!debug.contains("\"pass\""));
    }

    const FIXTURE_PFX: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/client.pfx");

    #[tokio::test]
    async fn test_client_is_built_from_pkcs12() {
        let identity =
            CertificateIdentity::create("user", "pass", FIXTURE_PFX, "fixture-password").unwrap();
        let transport = HttpsTransport::new(&identity);

        assert!(transport.load_identity().await.is_ok());
        assert!(transport.build_client().await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_certificate_password() {
        let identity =
            CertificateIdentity::create("user", "pass", FIXTURE_PFX, "wrong-password").unwrap();

        assert!(matches!(
            HttpsTransport::new(&identity).build_client().await,
            Err(TransportError::CertificateLoad { .. })
        ));
    }
}
