//! GetPaymentOrderStatus: state of an imported order

use crate::operation::{ServiceAction, SoapRequest};
use serde::Deserialize;
use tbcsoap::SoapResponse;

/// Status query for an imported order
///
/// `document_number` is the identifier returned by the import
/// (`paymentId`), sent as `singlePaymentId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPaymentOrderStatusRequestIo {
    pub document_number: i64,
}

impl GetPaymentOrderStatusRequestIo {
    pub fn new(document_number: i64) -> Self {
        Self { document_number }
    }
}

impl SoapRequest for GetPaymentOrderStatusRequestIo {
    type Response = GetPaymentOrderStatusResponseIo;

    fn action(&self) -> ServiceAction {
        ServiceAction::GetPaymentOrderStatus
    }

    fn soap_xml(&self) -> String {
        format!(
            r#"<myg:GetPaymentOrderStatusRequestIo>
  <myg:singlePaymentId>{}</myg:singlePaymentId>
</myg:GetPaymentOrderStatusRequestIo>"#,
            self.document_number
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentOrderStatusResponseIo {
    /// Bank status code of the order
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl SoapResponse for GetPaymentOrderStatusResponseIo {
    const ELEMENT: &'static str = "GetPaymentOrderStatusResponseIo";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbcsoap::deserialize_payload;

    #[test]
    fn test_request_fragment() {
        let xml = GetPaymentOrderStatusRequestIo::new(1632027071).soap_xml();
        assert!(xml.contains("<myg:singlePaymentId>1632027071</myg:singlePaymentId>"));
    }

    #[test]
    fn test_rejected_order() {
        let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Body><ns2:GetPaymentOrderStatusResponseIo xmlns:ns2="http://www.mygemini.com/schemas/mygemini"><ns2:status>R</ns2:status><ns2:rejectionReason>Insufficient funds</ns2:rejectionReason></ns2:GetPaymentOrderStatusResponseIo></SOAP-ENV:Body></SOAP-ENV:Envelope>"#;
        let response: GetPaymentOrderStatusResponseIo = deserialize_payload(xml).unwrap();
        assert_eq!(response.status, "R");
        assert_eq!(response.rejection_reason.as_deref(), Some("Insufficient funds"));
    }
}
