//! # tbcsoap - SOAP layer of the TBC DBI client
//!
//! This crate implements the XML side of the DBI protocol: building request
//! envelopes carrying a WS-Security `UsernameToken`, recognising SOAP faults,
//! and extracting the typed payload of a successful response.
//!
//! ## Architecture
//!
//! - [`build_request_envelope`] / [`RequestEnvelope`] : outbound documents
//! - [`SoapFault`] / [`parse_soap_fault`] : server-side errors
//! - [`deserialize_payload`] / [`SoapResponse`] : typed response bodies
//! - [`format_xml`] : pretty printer used for diagnostics
//!
//! ## Example
//!
//! ```
//! use tbcsoap::{build_request_envelope, parse_soap_fault};
//!
//! let envelope = build_request_envelope(
//!     "user",
//!     "secret",
//!     "nonce-1",
//!     "<myg:GetPaymentOrderStatusRequestIo><myg:singlePaymentId>1</myg:singlePaymentId></myg:GetPaymentOrderStatusRequestIo>",
//! ).unwrap();
//! assert!(envelope.as_str().contains("<wsse:Nonce>nonce-1</wsse:Nonce>"));
//!
//! let fault = parse_soap_fault(r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
//!   <s:Body><s:Fault><faultcode>a:USER_IS_BLOCKED</faultcode><faultstring>User is blocked.</faultstring></s:Fault></s:Body>
//! </s:Envelope>"#).unwrap();
//! assert_eq!(fault.to_string(), "SOAP Fault [a:USER_IS_BLOCKED]: User is blocked.");
//! ```

mod envelope;
mod fault;
mod format;
mod parser;
mod payload;

pub use envelope::{build_request_envelope, EnvelopeError, RequestEnvelope};
pub use fault::{build_soap_fault, parse_soap_fault, SoapFault};
pub use format::format_xml;
pub use parser::SoapParseError;
pub use payload::{deserialize_payload, PayloadError, SoapResponse};

/// Escapes a value for use as XML text or attribute content
pub use quick_xml::escape::escape as xml_escape;

/// Namespace URIs used by the DBI service
pub mod ns {
    /// SOAP 1.1 envelope
    pub const SOAP_ENVELOPE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

    /// DBI operations; also the prefix of every SOAPAction header
    pub const MYGEMINI: &str = "http://www.mygemini.com/schemas/mygemini";

    /// WS-Security 2004/01 secext
    pub const WSSE: &str =
        "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";

    /// XML Schema instance (`xsi:type` on payment orders)
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
}
