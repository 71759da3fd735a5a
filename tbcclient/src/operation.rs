//! Request contract shared by every DBI operation

use std::fmt;
use std::marker::PhantomData;
use tbcsoap::{ns, SoapResponse};

/// DBI operation name, used in the SOAPAction header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceAction {
    GetAccountMovements,
    ImportSinglePaymentOrders,
    GetPaymentOrderStatus,
    ChangePassword,
    GetPostboxMessages,
}

impl ServiceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAccountMovements => "GetAccountMovements",
            Self::ImportSinglePaymentOrders => "ImportSinglePaymentOrders",
            Self::GetPaymentOrderStatus => "GetPaymentOrderStatus",
            Self::ChangePassword => "ChangePassword",
            Self::GetPostboxMessages => "GetPostboxMessages",
        }
    }

    /// `http://www.mygemini.com/schemas/mygemini/<Action>`
    pub fn soap_action(&self) -> String {
        format!("{}/{}", ns::MYGEMINI, self.as_str())
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fresh UUIDv4 nonce
pub fn generate_nonce() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A DBI request with its typed response
///
/// `soap_xml` returns the body fragment using the `myg` (and, for payment
/// orders, `xsi`) prefixes declared by the envelope.
pub trait SoapRequest {
    type Response: SoapResponse;

    fn action(&self) -> ServiceAction;

    fn soap_xml(&self) -> String;

    /// Nonce of the `UsernameToken`; a new UUID unless the operation needs
    /// a specific value
    fn nonce(&self) -> String {
        generate_nonce()
    }
}

/// What the caller needs to perform one call: action, body fragment and nonce
pub struct OperationDescriptor<T> {
    action: ServiceAction,
    body: String,
    nonce: String,
    _response: PhantomData<fn() -> T>,
}

impl<T: SoapResponse> OperationDescriptor<T> {
    pub fn new(action: ServiceAction, body: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            action,
            body: body.into(),
            nonce: nonce.into(),
            _response: PhantomData,
        }
    }

    /// Renders a request; its nonce is read exactly once
    pub fn from_request<R>(request: &R) -> Self
    where
        R: SoapRequest<Response = T>,
    {
        Self::new(request.action(), request.soap_xml(), request.nonce())
    }

    pub fn action(&self) -> ServiceAction {
        self.action
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }
}

impl<T> fmt::Debug for OperationDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("action", &self.action)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}
