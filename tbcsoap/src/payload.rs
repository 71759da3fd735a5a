//! Typed extraction of the `Body` payload of a response
//!
//! The DBI service qualifies response elements with arbitrary prefixes
//! (`ns2:`, `a:`...). The payload element is copied out of the envelope with
//! every element and attribute reduced to its local name and namespace
//! declarations dropped, then handed to `quick_xml::de`, so response types
//! only name local elements.

use crate::fault::{parse_soap_fault, SoapFault};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

/// Response document of one DBI operation
pub trait SoapResponse: DeserializeOwned {
    /// Local name of the element expected as first child of `Body`
    const ELEMENT: &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Malformed response XML: {0}")]
    Xml(String),

    #[error("Response has no SOAP Envelope")]
    MissingEnvelope,

    #[error("Response has no SOAP Body")]
    MissingBody,

    #[error("Response SOAP Body is empty")]
    EmptyBody,

    #[error("{0}")]
    Fault(SoapFault),

    #[error("Unexpected response element: expected {expected}, found {found}")]
    UnexpectedElement { expected: &'static str, found: String },

    #[error("Cannot deserialize response: {0}")]
    Deserialize(#[from] quick_xml::de::DeError),
}

fn xml_error(error: impl fmt::Display) -> PayloadError {
    PayloadError::Xml(error.to_string())
}

/// Deserializes the first element under `Envelope/Body` into `T`
///
/// # Errors
///
/// - [`PayloadError::Fault`] when the body holds a SOAP fault
/// - [`PayloadError::UnexpectedElement`] when the element is not `T::ELEMENT`
/// - [`PayloadError::MissingEnvelope`], [`PayloadError::MissingBody`] or
///   [`PayloadError::EmptyBody`] for incomplete documents
/// - [`PayloadError::Deserialize`] when the element does not match `T`
pub fn deserialize_payload<T: SoapResponse>(xml: &str) -> Result<T, PayloadError> {
    let payload = extract_payload(xml)?;

    if payload.name == "Fault" {
        let fault = parse_soap_fault(xml).map_err(xml_error)?;
        debug!("SOAP fault in response body: {}", fault);
        return Err(PayloadError::Fault(fault));
    }

    if payload.name != T::ELEMENT {
        return Err(PayloadError::UnexpectedElement {
            expected: T::ELEMENT,
            found: payload.name,
        });
    }

    Ok(quick_xml::de::from_str(&payload.document)?)
}

struct Payload {
    name: String,
    document: String,
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn extract_payload(xml: &str) -> Result<Payload, PayloadError> {
    let mut reader = Reader::from_str(xml);
    // local names of the open Envelope and Body elements
    let mut path: Vec<String> = Vec::with_capacity(2);

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) => {
                let name = local_name(&start);
                match path.len() {
                    0 if name != "Envelope" => return Err(PayloadError::MissingEnvelope),
                    1 if name != "Body" => {
                        reader.read_to_end(start.name()).map_err(xml_error)?;
                        continue;
                    }
                    2 => {
                        let document = copy_element(&mut reader, &start)?;
                        return Ok(Payload { name, document });
                    }
                    _ => {}
                }
                path.push(name);
            }
            Event::Empty(start) => {
                let name = local_name(&start);
                match path.len() {
                    0 if name == "Envelope" => return Err(PayloadError::MissingBody),
                    0 => return Err(PayloadError::MissingEnvelope),
                    1 if name == "Body" => return Err(PayloadError::EmptyBody),
                    2 => {
                        let mut writer = Writer::new(Vec::new());
                        writer
                            .write_event(Event::Empty(strip_prefixes(&start)?))
                            .map_err(xml_error)?;
                        return Ok(Payload {
                            name,
                            document: String::from_utf8_lossy(&writer.into_inner()).into_owned(),
                        });
                    }
                    _ => {}
                }
            }
            Event::End(_) | Event::Eof => {
                return Err(match path.len() {
                    0 => PayloadError::MissingEnvelope,
                    1 => PayloadError::MissingBody,
                    _ => PayloadError::EmptyBody,
                });
            }
            _ => {}
        }
    }
}

/// Copies the element opened by `start` up to its matching end tag
fn copy_element(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
) -> Result<String, PayloadError> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Start(strip_prefixes(start)?))
        .map_err(xml_error)?;

    let mut depth = 1usize;
    while depth > 0 {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                depth += 1;
                writer
                    .write_event(Event::Start(strip_prefixes(&e)?))
                    .map_err(xml_error)?;
            }
            Event::Empty(e) => {
                writer
                    .write_event(Event::Empty(strip_prefixes(&e)?))
                    .map_err(xml_error)?;
            }
            Event::End(e) => {
                depth -= 1;
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                writer
                    .write_event(Event::End(BytesEnd::new(name)))
                    .map_err(xml_error)?;
            }
            Event::Eof => return Err(xml_error("unexpected end of document")),
            other => writer.write_event(other).map_err(xml_error)?,
        }
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn strip_prefixes(start: &BytesStart<'_>) -> Result<BytesStart<'static>, PayloadError> {
    let mut stripped = BytesStart::new(local_name(start));

    for attr in start.attributes() {
        let attr = attr.map_err(xml_error)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        stripped.push_attribute((attr.key.local_name().as_ref(), attr.value.as_ref()));
    }

    Ok(stripped)
}
