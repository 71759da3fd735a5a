//! GetPostboxMessages: bank notifications

use crate::operation::{ServiceAction, SoapRequest};
use serde::Deserialize;
use std::fmt;
use tbcsoap::SoapResponse;

/// Kind of postbox message to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    MovementMessage,
    PaymentOrderStatusMessage,
    PasswordExpirationMessage,
    BankMessage,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MovementMessage => "MOVEMENT_MESSAGE",
            Self::PaymentOrderStatusMessage => "PAYMENT_ORDER_STATUS_MESSAGE",
            Self::PasswordExpirationMessage => "PASSWORD_EXPIRATION_MESSAGE",
            Self::BankMessage => "BANK_MESSAGE",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPostboxMessagesRequestIo {
    pub message_type: MessageType,
}

impl GetPostboxMessagesRequestIo {
    pub fn new(message_type: MessageType) -> Self {
        Self { message_type }
    }
}

impl SoapRequest for GetPostboxMessagesRequestIo {
    type Response = GetPostboxMessagesResponseIo;

    fn action(&self) -> ServiceAction {
        ServiceAction::GetPostboxMessages
    }

    fn soap_xml(&self) -> String {
        format!(
            r#"<myg:GetPostboxMessagesRequestIo>
  <myg:messageType>{}</myg:messageType>
</myg:GetPostboxMessagesRequestIo>"#,
            self.message_type
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetPostboxMessagesResponseIo {
    #[serde(default)]
    pub messages: Vec<PostboxMessage>,
}

impl SoapResponse for GetPostboxMessagesResponseIo {
    const ELEMENT: &'static str = "GetPostboxMessagesResponseIo";
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostboxMessage {
    pub message_id: i64,
    pub message_text: String,
    pub message_type: String,
    pub message_status: String,
    #[serde(default)]
    pub additional_attributes: Vec<AdditionalAttribute>,
}

/// Name/value pair attached to a message, e.g. the movement date
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdditionalAttribute {
    pub name: String,
    pub value: String,
}
