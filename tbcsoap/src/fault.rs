//! SOAP 1.1 faults returned by the DBI service

use crate::ns;
use crate::parser::{child_text, find_descendant, parse_document, SoapParseError};
use std::fmt;
use xmltree::{Element, XMLNode};

/// Server-side SOAP fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    /// Fault code as sent, e.g. `a:USER_IS_BLOCKED`
    pub fault_code: String,

    /// Human readable description
    pub fault_string: String,
}

impl SoapFault {
    pub fn new(fault_code: impl Into<String>, fault_string: impl Into<String>) -> Self {
        Self {
            fault_code: fault_code.into(),
            fault_string: fault_string.into(),
        }
    }

    /// `SOAP Fault [<code>]: <string>`
    pub fn formatted_error(&self) -> String {
        self.to_string()
    }

    /// Compares the fault code ignoring ASCII case
    pub fn is_fault_code(&self, code: &str) -> bool {
        self.fault_code.eq_ignore_ascii_case(code)
    }
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SOAP Fault [{}]: {}", self.fault_code, self.fault_string)
    }
}

impl std::error::Error for SoapFault {}

/// Extracts the fault of a response document
///
/// The `Fault` element is looked up anywhere in the document, in the SOAP
/// envelope namespace. Missing `faultcode` or `faultstring` children yield
/// empty strings.
///
/// # Errors
///
/// - [`SoapParseError::XmlError`] when the text is not XML
/// - [`SoapParseError::NoFault`] when the document holds no fault
pub fn parse_soap_fault(xml: &str) -> Result<SoapFault, SoapParseError> {
    let root = parse_document(xml)?;
    fault_from_tree(&root).ok_or(SoapParseError::NoFault)
}

pub(crate) fn fault_from_tree(root: &Element) -> Option<SoapFault> {
    find_descendant(root, "Fault", ns::SOAP_ENVELOPE).map(|fault| SoapFault {
        fault_code: child_text(fault, "faultcode"),
        fault_string: child_text(fault, "faultstring"),
    })
}

/// Builds a fault document as the DBI service sends it
///
/// Used to script server responses in tests.
#[doc(hidden)]
pub fn build_soap_fault(fault_code: &str, fault_string: &str) -> Result<String, xmltree::Error> {
    let mut fault = Element::new("s:Fault");

    let mut faultcode_elem = Element::new("faultcode");
    faultcode_elem
        .children
        .push(XMLNode::Text(fault_code.to_string()));
    fault.children.push(XMLNode::Element(faultcode_elem));

    let mut faultstring_elem = Element::new("faultstring");
    faultstring_elem
        .children
        .push(XMLNode::Text(fault_string.to_string()));
    fault.children.push(XMLNode::Element(faultstring_elem));

    let mut body = Element::new("s:Body");
    body.children.push(XMLNode::Element(fault));

    let mut envelope = Element::new("s:Envelope");
    envelope
        .attributes
        .insert("xmlns:s".to_string(), ns::SOAP_ENVELOPE.to_string());
    envelope.children.push(XMLNode::Element(body));

    let mut buf = Vec::new();
    let config = xmltree::EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(true)
        .indent_string("  ");
    envelope.write_with_config(&mut buf, config)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
