//! Sorting of raw responses into success bodies and errors

use crate::error::{Result, TbcError};
use crate::transport::RawResponse;
use tbcsoap::{format_xml, parse_soap_fault};
use tracing::warn;

/// Splits raw responses into success bodies and typed failures
///
/// A success status passes the body on untouched. Any other status becomes a
/// [`TbcError::Fault`] when the body carries a SOAP fault, otherwise a
/// [`TbcError::HttpStatus`] with the re-indented body.
pub fn classify(response: RawResponse) -> Result<String> {
    let RawResponse { status, body } = response;

    if status.is_success() {
        return Ok(body);
    }

    match parse_soap_fault(&body) {
        Ok(fault) => {
            warn!("HTTP {}: {}", status.as_u16(), fault);
            Err(TbcError::Fault(fault))
        }
        Err(e) => {
            warn!("HTTP {} without SOAP fault ({})", status.as_u16(), e);
            Err(TbcError::HttpStatus {
                status: status.as_u16(),
                body: format_xml(&body),
            })
        }
    }
}
