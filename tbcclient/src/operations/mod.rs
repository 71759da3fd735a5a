//! The five DBI operations: request fragments and response documents

pub mod movements;
pub mod password;
pub mod payment_orders;
pub mod payment_status;
pub mod postbox;

pub use movements::{
    AccountMovement, GetAccountMovementsRequestIo, GetAccountMovementsResponseIo, Money,
    MovementsResult, Pager, DEFAULT_PAGE_SIZE,
};
pub use password::{ChangePasswordRequestIo, ChangePasswordResponseIo};
pub use payment_orders::{
    BankTransferCommonDetails, ImportSinglePaymentOrdersRequestIo,
    ImportSinglePaymentOrdersResponseIo, PaymentOrder, TransferKind,
};
pub use payment_status::{GetPaymentOrderStatusRequestIo, GetPaymentOrderStatusResponseIo};
pub use postbox::{
    AdditionalAttribute, GetPostboxMessagesRequestIo, GetPostboxMessagesResponseIo, MessageType,
    PostboxMessage,
};
