//! # tbcclient - TBC Bank DBI client
//!
//! Client for the TBC Bank Direct Banking Integration SOAP service. Calls are
//! authenticated twice: mutual TLS with a PKCS#12 (`.pfx`) client certificate
//! and a WS-Security `UsernameToken` in the SOAP header.
//!
//! ## Architecture
//!
//! - [`TbcSoapCaller`] : builds the envelope, posts it, classifies the answer
//!   and deserializes the typed response
//! - [`operations`] : the five DBI operations ([`SoapRequest`] implementations)
//! - [`SoapTransport`] / [`HttpsTransport`] : the HTTPS exchange
//! - [`get_account_movements`] : complete statements over a period
//! - [`TbcConfigExt`] : settings stored in `tbcconfig`
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use tbcclient::{get_account_movements, TbcSoapCaller};
//! use tbctypes::Period;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let caller = TbcSoapCaller::from_config()?;
//!
//!     let period = Period::new(
//!         NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2023, 9, 26).unwrap(),
//!     )?;
//!
//!     for movement in get_account_movements(&caller, period).await? {
//!         println!("{} {:?}", movement.movement_id, movement.amount);
//!     }
//!     Ok(())
//! }
//! ```

pub mod caller;
pub mod classifier;
pub mod config_ext;
pub mod credentials;
pub mod error;
pub mod movements;
pub mod operation;
pub mod operations;
pub mod transport;

pub use caller::TbcSoapCaller;
pub use classifier::classify;
pub use config_ext::TbcConfigExt;
pub use credentials::{CertificateIdentity, Credentials};
pub use error::{Result, TbcError, TransportError};
pub use movements::{get_account_movements, get_account_movements_with_page_size};
pub use operation::{generate_nonce, OperationDescriptor, ServiceAction, SoapRequest};
pub use operations::{
    AccountMovement, BankTransferCommonDetails, ChangePasswordRequestIo,
    ChangePasswordResponseIo, GetAccountMovementsRequestIo, GetAccountMovementsResponseIo,
    GetPaymentOrderStatusRequestIo, GetPaymentOrderStatusResponseIo,
    GetPostboxMessagesRequestIo, GetPostboxMessagesResponseIo,
    ImportSinglePaymentOrdersRequestIo, ImportSinglePaymentOrdersResponseIo, MessageType,
    PaymentOrder, TransferKind,
};
pub use transport::{HttpsTransport, RawResponse, SoapTransport, DEFAULT_ENDPOINT};

pub use tbcsoap::SoapFault;
