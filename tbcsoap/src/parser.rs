//! Tree parsing helpers shared by the envelope and fault modules

use std::io::BufReader;
use xmltree::{Element, XMLNode};

/// SOAP parsing error
#[derive(Debug, thiserror::Error)]
pub enum SoapParseError {
    #[error("XML parse error: {0}")]
    XmlError(#[from] xmltree::ParseError),

    #[error("No SOAP Fault found in response")]
    NoFault,
}

/// Parses a complete XML document into a tree
pub(crate) fn parse_document(xml: &str) -> Result<Element, SoapParseError> {
    let reader = BufReader::new(xml.trim_start().as_bytes());
    Ok(Element::parse(reader)?)
}

/// Depth-first search for an element by local name and namespace URI
pub(crate) fn find_descendant<'a>(
    element: &'a Element,
    name: &str,
    namespace: &str,
) -> Option<&'a Element> {
    if element.name == name && element.namespace.as_deref() == Some(namespace) {
        return Some(element);
    }

    element
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .find_map(|child| find_descendant(child, name, namespace))
}

/// Text content of a direct child, trimmed, empty when absent
pub(crate) fn child_text(element: &Element, name: &str) -> String {
    element
        .get_child(name)
        .and_then(|child| child.get_text())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
