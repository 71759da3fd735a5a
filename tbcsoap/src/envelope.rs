//! Outbound SOAP envelope with WS-Security `UsernameToken`

use crate::ns;
use crate::parser::{parse_document, SoapParseError};
use quick_xml::escape::escape;
use std::fmt;

/// Error raised when the assembled envelope is not well-formed XML
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("SOAP envelope is not well-formed: {0}")]
    Malformed(#[from] SoapParseError),
}

/// Complete SOAP document for one call
///
/// Built once per call and consumed by the transport. The text is kept
/// exactly as assembled so the operation fragment reaches the wire verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    document: String,
}

impl RequestEnvelope {
    pub fn as_str(&self) -> &str {
        &self.document
    }

    pub fn into_string(self) -> String {
        self.document
    }
}

// The document carries the clear-text password.
impl fmt::Debug for RequestEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestEnvelope")
            .field("len", &self.document.len())
            .finish()
    }
}

/// Wraps an operation fragment into a SOAP envelope
///
/// The header carries `Username`, `Password` and `Nonce` as given (escaped,
/// not hashed); the TLS channel protects them. `body` is inserted unchanged
/// inside `soapenv:Body` and may use the `myg` and `xsi` prefixes.
///
/// # Errors
///
/// Returns [`EnvelopeError::Malformed`] when the resulting document does not
/// parse, e.g. a fragment with unbalanced tags or an undeclared prefix.
pub fn build_request_envelope(
    username: &str,
    password: &str,
    nonce: &str,
    body: &str,
) -> Result<RequestEnvelope, EnvelopeError> {
    let document = format!(
        r#"<soapenv:Envelope xmlns:soapenv="{soap}"
xmlns:myg="{myg}"
xmlns:wsse="{wsse}"
xmlns:xsi="{xsi}">
   <soapenv:Header>
   <wsse:Security>
    <wsse:UsernameToken>
      <wsse:Username>{username}</wsse:Username>
      <wsse:Password>{password}</wsse:Password>
      <wsse:Nonce>{nonce}</wsse:Nonce>
    </wsse:UsernameToken>
   </wsse:Security>
   </soapenv:Header>
   <soapenv:Body>
     {body}
   </soapenv:Body>
</soapenv:Envelope>"#,
        soap = ns::SOAP_ENVELOPE,
        myg = ns::MYGEMINI,
        wsse = ns::WSSE,
        xsi = ns::XSI,
        username = escape(username),
        password = escape(password),
        nonce = escape(nonce),
        body = body,
    );

    parse_document(&document)?;

    Ok(RequestEnvelope { document })
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmltree::{Element, XMLNode};

    const BODY: &str = "<myg:GetPaymentOrderStatusRequestIo><myg:singlePaymentId>1632027071</myg:singlePaymentId></myg:GetPaymentOrderStatusRequestIo>";

    fn elements(element: &Element) -> impl Iterator<Item = &Element> {
        element.children.iter().filter_map(XMLNode::as_element)
    }

    fn count_named(element: &Element, name: &str) -> usize {
        let own = usize::from(element.name == name);
        own + elements(element).map(|e| count_named(e, name)).sum::<usize>()
    }

    #[test]
    fn test_header_carries_single_username_token() {
        let envelope =
            build_request_envelope("integration_username", "p@ss", "nonce-42", BODY).unwrap();
        let root = parse_document(envelope.as_str()).unwrap();

        assert_eq!(root.name, "Envelope");
        assert_eq!(root.namespace.as_deref(), Some(ns::SOAP_ENVELOPE));
        assert_eq!(count_named(&root, "UsernameToken"), 1);

        let token = root
            .get_child("Header")
            .and_then(|h| h.get_child("Security"))
            .and_then(|s| s.get_child("UsernameToken"))
            .unwrap();
        assert_eq!(token.namespace.as_deref(), Some(ns::WSSE));
        assert_eq!(
            token.get_child("Username").unwrap().get_text().unwrap(),
            "integration_username"
        );
        assert_eq!(token.get_child("Password").unwrap().get_text().unwrap(), "p@ss");
        assert_eq!(token.get_child("Nonce").unwrap().get_text().unwrap(), "nonce-42");
    }

    #[test]
    fn test_body_fragment_is_verbatim() {
        let envelope = build_request_envelope("u", "p", "n", BODY).unwrap();
        assert!(envelope.as_str().contains(BODY));

        let root = parse_document(envelope.as_str()).unwrap();
        let body = root.get_child("Body").unwrap();
        let request = elements(body).next().unwrap();
        assert_eq!(request.name, "GetPaymentOrderStatusRequestIo");
        assert_eq!(request.namespace.as_deref(), Some(ns::MYGEMINI));
    }

    #[test]
    fn test_credentials_are_escaped() {
        let envelope = build_request_envelope("u", "a<b&c", "n", BODY).unwrap();
        assert!(envelope.as_str().contains("<wsse:Password>a&lt;b&amp;c</wsse:Password>"));

        let root = parse_document(envelope.as_str()).unwrap();
        let password = root
            .get_child("Header")
            .and_then(|h| h.get_child("Security"))
            .and_then(|s| s.get_child("UsernameToken"))
            .and_then(|t| t.get_child("Password"))
            .and_then(|p| p.get_text())
            .unwrap();
        assert_eq!(password, "a<b&c");
    }

    #[test]
    fn test_unbalanced_fragment_is_rejected() {
        let result = build_request_envelope("u", "p", "n", "<myg:ChangePasswordRequestIo>");
        assert!(matches!(result, Err(EnvelopeError::Malformed(_))));
    }

    #[test]
    fn test_undeclared_prefix_is_rejected() {
        let result = build_request_envelope("u", "p", "n", "<foo:Request/>");
        assert!(matches!(result, Err(EnvelopeError::Malformed(_))));
    }

    #[test]
    fn test_debug_hides_document() {
        let envelope = build_request_envelope("u", "secret", "n", BODY).unwrap();
        assert!(!format!("{:?}", envelope).contains("secret"));
    }
}
