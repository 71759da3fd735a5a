//! Scripted in-memory transport and response builders

#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;
use tbcclient::{Credentials, RawResponse, SoapTransport, TbcSoapCaller, TransportError};
use tbcsoap::RequestEnvelope;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub soap_action: String,
    pub envelope: String,
}

impl RecordedRequest {
    /// Text of the first `<myg:{name}>` element of the envelope
    pub fn value_of(&self, name: &str) -> Option<String> {
        let open = format!("<myg:{}>", name);
        let close = format!("</myg:{}>", name);
        let start = self.envelope.find(&open)? + open.len();
        let end = self.envelope[start..].find(&close)? + start;
        Some(self.envelope[start..end].to_string())
    }

    pub fn nonce(&self) -> String {
        let start = self.envelope.find("<wsse:Nonce>").unwrap() + "<wsse:Nonce>".len();
        let end = self.envelope.find("</wsse:Nonce>").unwrap();
        self.envelope[start..end].to_string()
    }
}

/// Answers calls from a queue and remembers what was sent
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
        }));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoapTransport for ScriptedTransport {
    async fn post(
        &self,
        soap_action: &str,
        envelope: &RequestEnvelope,
    ) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            soap_action: soap_action.to_string(),
            envelope: envelope.as_str().to_string(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request {
                    endpoint: "scripted".to_string(),
                    reason: "no scripted response left".to_string(),
                })
            })
    }
}

pub fn caller(transport: ScriptedTransport) -> TbcSoapCaller<ScriptedTransport> {
    let credentials =
        Credentials::new("integration_username", "initial_integration_password").unwrap();
    TbcSoapCaller::with_transport(credentials, transport)
}

/// Wraps a payload into a response envelope as the DBI service sends it
pub fn soap_response(payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Header/>
  <SOAP-ENV:Body>
    {}
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#,
        payload
    )
}

/// One page of movements with ids `first..first + count`
pub fn movements_page(
    page_index: u32,
    page_size: u32,
    total: u64,
    first: u64,
    count: u64,
) -> String {
    let mut payload = format!(
        r#"<ns2:GetAccountMovementsResponseIo xmlns:ns2="http://www.mygemini.com/schemas/mygemini">
      <ns2:result>
        <ns2:pager><ns2:pageIndex>{}</ns2:pageIndex><ns2:pageSize>{}</ns2:pageSize></ns2:pager>
        <ns2:totalCount>{}</ns2:totalCount>
      </ns2:result>"#,
        page_index, page_size, total
    );

    for id in first..first + count {
        payload.push_str(&format!(
            r#"
      <ns2:accountMovement>
        <ns2:movementId>{}</ns2:movementId>
        <ns2:amount><ns2:amount>1.00</ns2:amount><ns2:currency>GEL</ns2:currency></ns2:amount>
      </ns2:accountMovement>"#,
            id
        ));
    }

    payload.push_str("\n    </ns2:GetAccountMovementsResponseIo>");
    soap_response(&payload)
}

pub fn blocked_fault() -> String {
    tbcsoap::build_soap_fault("a:USER_IS_BLOCKED", "User is blocked.").unwrap()
}
