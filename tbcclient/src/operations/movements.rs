//! GetAccountMovements: one page of account statement lines

use crate::operation::{ServiceAction, SoapRequest};
use rust_decimal::Decimal;
use serde::Deserialize;
use tbcsoap::SoapResponse;
use tbctypes::Period;

/// Page size requested when none is given
pub const DEFAULT_PAGE_SIZE: u32 = 700;

/// Request for one page of movements over a period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetAccountMovementsRequestIo {
    pub period: Period,
    /// Zero-based page index
    pub page_index: u32,
    pub page_size: u32,
}

impl GetAccountMovementsRequestIo {
    pub fn new(period: Period, page_index: u32) -> Self {
        Self {
            period,
            page_index,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl SoapRequest for GetAccountMovementsRequestIo {
    type Response = GetAccountMovementsResponseIo;

    fn action(&self) -> ServiceAction {
        ServiceAction::GetAccountMovements
    }

    fn soap_xml(&self) -> String {
        // both bounds of the period are inclusive days
        format!(
            r#"<myg:GetAccountMovementsRequestIo>
  <myg:accountMovementFilterIo>
    <myg:pager>
      <myg:pageIndex>{}</myg:pageIndex>
      <myg:pageSize>{}</myg:pageSize>
    </myg:pager>
    <myg:periodFrom>{}T00:00:00.000</myg:periodFrom>
    <myg:periodTo>{}T23:59:59.999</myg:periodTo>
  </myg:accountMovementFilterIo>
</myg:GetAccountMovementsRequestIo>"#,
            self.page_index,
            self.page_size,
            self.period.from().format("%Y-%m-%d"),
            self.period.to().format("%Y-%m-%d"),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountMovementsResponseIo {
    /// Paging metadata; absent in malformed answers
    #[serde(default)]
    pub result: Option<MovementsResult>,

    #[serde(default)]
    pub account_movement: Vec<AccountMovement>,
}

impl SoapResponse for GetAccountMovementsResponseIo {
    const ELEMENT: &'static str = "GetAccountMovementsResponseIo";
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementsResult {
    pub pager: Pager,
    pub total_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub page_index: u32,
    pub page_size: u32,
}

/// Amount with its currency code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

/// One statement line
///
/// Dates are kept as sent by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMovement {
    pub movement_id: String,
    #[serde(default)]
    pub external_payment_id: Option<String>,
    #[serde(default)]
    pub debit_credit: Option<String>,
    #[serde(default)]
    pub value_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub additional_information: Option<String>,
    #[serde(default)]
    pub document_date: Option<String>,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub partner_account_number: Option<String>,
    #[serde(default)]
    pub partner_name: Option<String>,
    #[serde(default)]
    pub partner_tax_code: Option<String>,
    #[serde(default)]
    pub partner_bank_code: Option<String>,
    #[serde(default)]
    pub partner_bank: Option<String>,
    #[serde(default)]
    pub taxpayer_code: Option<String>,
    #[serde(default)]
    pub taxpayer_name: Option<String>,
    #[serde(default)]
    pub treasury_code: Option<String>,
    #[serde(default)]
    pub operation_code: Option<String>,
    #[serde(default)]
    pub additional_description: Option<String>,
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
}
