//! ImportSinglePaymentOrders: submit one transfer

use crate::operation::{ServiceAction, SoapRequest};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt::Write;
use tbcsoap::{xml_escape, SoapResponse};
use tbctypes::BankAccount;

/// Fields shared by every kind of transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankTransferCommonDetails {
    pub sender: BankAccount,
    pub document_number: i64,
    pub amount: Decimal,
    pub beneficiary_name: String,
    pub description: String,
    pub personal_number: Option<String>,
    pub additional_description: Option<String>,
}

impl BankTransferCommonDetails {
    pub fn new(
        sender: BankAccount,
        document_number: i64,
        amount: Decimal,
        beneficiary_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            document_number,
            amount,
            beneficiary_name: beneficiary_name.into(),
            description: description.into(),
            personal_number: None,
            additional_description: None,
        }
    }

    pub fn with_personal_number(mut self, personal_number: impl Into<String>) -> Self {
        self.personal_number = Some(personal_number.into());
        self
    }

    pub fn with_additional_description(mut self, description: impl Into<String>) -> Self {
        self.additional_description = Some(description.into());
        self
    }
}

/// Kind-specific part of a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferKind {
    WithinBank {
        recipient: BankAccount,
    },
    ToOwnAccount {
        recipient: BankAccount,
    },
    OtherBankNationalCurrency {
        recipient: BankAccount,
        beneficiary_tax_code: String,
    },
    OtherBankForeignCurrency {
        recipient: BankAccount,
        beneficiary_address: String,
        beneficiary_bank_code: String,
        beneficiary_bank_name: String,
        charge_details: String,
    },
    /// Payment to the state treasury; no recipient account, beneficiary or
    /// description
    Treasury {
        treasury_code: i64,
    },
}

impl TransferKind {
    /// `xsi:type` of the `singlePaymentOrder` element
    pub fn xsi_type(&self) -> &'static str {
        match self {
            Self::WithinBank { .. } => "myg:TransferWithinBankPaymentOrderIo",
            Self::ToOwnAccount { .. } => "myg:TransferToOwnAccountPaymentOrderIo",
            Self::OtherBankNationalCurrency { .. } => {
                "myg:TransferToOtherBankNationalCurrencyPaymentOrderIo"
            }
            Self::OtherBankForeignCurrency { .. } => {
                "myg:TransferToOtherBankForeignCurrencyPaymentOrderIo"
            }
            Self::Treasury { .. } => "myg:TreasuryTransferPaymentOrderIo",
        }
    }

    fn recipient(&self) -> Option<&BankAccount> {
        match self {
            Self::WithinBank { recipient }
            | Self::ToOwnAccount { recipient }
            | Self::OtherBankNationalCurrency { recipient, .. }
            | Self::OtherBankForeignCurrency { recipient, .. } => Some(recipient),
            Self::Treasury { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOrder {
    pub details: BankTransferCommonDetails,
    pub kind: TransferKind,
}

impl PaymentOrder {
    pub fn new(details: BankTransferCommonDetails, kind: TransferKind) -> Self {
        Self { details, kind }
    }
}

fn element(xml: &mut String, name: &str, value: &str) {
    let _ = write!(xml, "<myg:{name}>{}</myg:{name}>", xml_escape(value));
}

fn account(xml: &mut String, name: &str, account: &BankAccount) {
    let _ = write!(xml, "<myg:{name}>");
    element(xml, "accountNumber", account.iban().as_str());
    element(xml, "accountCurrencyCode", account.currency().code());
    let _ = write!(xml, "</myg:{name}>");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSinglePaymentOrdersRequestIo(pub PaymentOrder);

impl SoapRequest for ImportSinglePaymentOrdersRequestIo {
    type Response = ImportSinglePaymentOrdersResponseIo;

    fn action(&self) -> ServiceAction {
        ServiceAction::ImportSinglePaymentOrders
    }

    fn soap_xml(&self) -> String {
        let PaymentOrder { details, kind } = &self.0;
        let is_treasury = matches!(kind, TransferKind::Treasury { .. });
        let mut xml = String::new();

        xml.push_str("<myg:ImportSinglePaymentOrdersRequestIo>");
        let _ = write!(xml, r#"<myg:singlePaymentOrder xsi:type="{}">"#, kind.xsi_type());

        if let Some(recipient) = kind.recipient() {
            account(&mut xml, "creditAccount", recipient);
        }
        account(&mut xml, "debitAccount", &details.sender);
        element(&mut xml, "documentNumber", &details.document_number.to_string());

        xml.push_str("<myg:amount>");
        element(&mut xml, "amount", &details.amount.normalize().to_string());
        element(&mut xml, "currency", details.sender.currency().code());
        xml.push_str("</myg:amount>");

        if !is_treasury {
            element(&mut xml, "beneficiaryName", &details.beneficiary_name);
            if let Some(personal_number) = &details.personal_number {
                element(&mut xml, "beneficiaryPersonalNumber", personal_number);
            }
        }
        if let Some(additional) = &details.additional_description {
            element(&mut xml, "additionalDescription", additional);
        }
        if !is_treasury {
            element(&mut xml, "description", &details.description);
        }

        match kind {
            TransferKind::OtherBankNationalCurrency {
                beneficiary_tax_code,
                ..
            } => element(&mut xml, "beneficiaryTaxCode", beneficiary_tax_code),
            TransferKind::OtherBankForeignCurrency {
                beneficiary_address,
                beneficiary_bank_code,
                beneficiary_bank_name,
                charge_details,
                ..
            } => {
                element(&mut xml, "beneficiaryAddress", beneficiary_address);
                element(&mut xml, "beneficiaryBankCode", beneficiary_bank_code);
                element(&mut xml, "beneficiaryBankName", beneficiary_bank_name);
                element(&mut xml, "chargeDetails", charge_details);
            }
            TransferKind::Treasury { treasury_code } => {
                element(&mut xml, "treasuryCode", &treasury_code.to_string());
            }
            TransferKind::WithinBank { .. } | TransferKind::ToOwnAccount { .. } => {}
        }

        xml.push_str("</myg:singlePaymentOrder>");
        xml.push_str("</myg:ImportSinglePaymentOrdersRequestIo>");
        xml
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSinglePaymentOrdersResponseIo {
    /// Bank-side identifier of the accepted order
    pub payment_id: i64,
}

impl SoapResponse for ImportSinglePaymentOrdersResponseIo {
    const ELEMENT: &'static str = "ImportSinglePaymentOrdersResponseIo";
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tbcsoap::deserialize_payload;
    use tbctypes::Currency;

    fn gel(iban: &str) -> BankAccount {
        BankAccount::parse(iban, "GEL", true).unwrap()
    }

    fn details() -> BankTransferCommonDetails {
        BankTransferCommonDetails::new(
            gel("GE31TB7467936080100003"),
            63865984018636,
            dec!(0.01),
            "TEST",
            "TEST",
        )
    }

    fn render(kind: TransferKind, details: BankTransferCommonDetails) -> String {
        ImportSinglePaymentOrdersRequestIo(PaymentOrder::new(details, kind)).soap_xml()
    }

    #[test]
    fn test_within_bank_order() {
        let xml = render(
            TransferKind::WithinBank {
                recipient: gel("GE24TB7755145063300001"),
            },
            details(),
        );

        assert!(xml.contains(r#"xsi:type="myg:TransferWithinBankPaymentOrderIo""#));
        assert!(xml.contains("<myg:creditAccount><myg:accountNumber>GE24TB7755145063300001</myg:accountNumber><myg:accountCurrencyCode>GEL</myg:accountCurrencyCode></myg:creditAccount>"));
        assert!(xml.contains("<myg:debitAccount><myg:accountNumber>GE31TB7467936080100003</myg:accountNumber>"));
        assert!(xml.contains("<myg:documentNumber>63865984018636</myg:documentNumber>"));
        assert!(xml.contains("<myg:amount><myg:amount>0.01</myg:amount><myg:currency>GEL</myg:currency></myg:amount>"));
        assert!(xml.contains("<myg:beneficiaryName>TEST</myg:beneficiaryName>"));
        assert!(xml.contains("<myg:description>TEST</myg:description>"));
        assert!(!xml.contains("beneficiaryPersonalNumber"));
        assert!(!xml.contains("additionalDescription"));
    }

    #[test]
    fn test_optional_fields_are_rendered_when_set() {
        let xml = render(
            TransferKind::ToOwnAccount {
                recipient: gel("GE47TB7467936170100001"),
            },
            details()
                .with_personal_number("01001011111")
                .with_additional_description("invoice 7"),
        );

        assert!(xml.contains(r#"xsi:type="myg:TransferToOwnAccountPaymentOrderIo""#));
        assert!(xml.contains("<myg:beneficiaryPersonalNumber>01001011111</myg:beneficiaryPersonalNumber>"));
        assert!(xml.contains("<myg:additionalDescription>invoice 7</myg:additionalDescription>"));
    }

    #[test]
    fn test_foreign_currency_order() {
        let mut details = details();
        details.sender = BankAccount::new(
            tbctypes::Iban::new("GE47TB7467936170100001").unwrap(),
            Currency::USD,
        );
        details.beneficiary_name = "Shenzhen Shinekoo Supply Chain Co.,Ltd & Sons".to_string();

        let xml = render(
            TransferKind::OtherBankForeignCurrency {
                recipient: BankAccount::parse("4000109819100186641", "USD", false).unwrap(),
                beneficiary_address: "China".to_string(),
                beneficiary_bank_code: "ICBKCNBJSZN".to_string(),
                beneficiary_bank_name: "INDUSTRIAL AND COMMERCIAL BANK OF CHINA".to_string(),
                charge_details: "SHA".to_string(),
            },
            details,
        );

        assert!(xml.contains("<myg:accountNumber>4000109819100186641</myg:accountNumber>"));
        assert!(xml.contains("<myg:currency>USD</myg:currency>"));
        assert!(xml.contains("Co.,Ltd &amp; Sons"));
        assert!(xml.contains("<myg:beneficiaryBankCode>ICBKCNBJSZN</myg:beneficiaryBankCode>"));
        assert!(xml.contains("<myg:chargeDetails>SHA</myg:chargeDetails>"));
        assert!(tbcsoap::build_request_envelope("u", "p", "n", &xml).is_ok());
    }

    #[test]
    fn test_national_currency_order() {
        let xml = render(
            TransferKind::OtherBankNationalCurrency {
                recipient: gel("GE33BG0000000263255500"),
                beneficiary_tax_code: "123123123".to_string(),
            },
            details(),
        );
        assert!(xml.contains("TransferToOtherBankNationalCurrencyPaymentOrderIo"));
        assert!(xml.contains("<myg:beneficiaryTaxCode>123123123</myg:beneficiaryTaxCode>"));
    }

    #[test]
    fn test_treasury_order_omits_beneficiary() {
        let xml = render(
            TransferKind::Treasury {
                treasury_code: 101001000,
            },
            details(),
        );

        assert!(xml.contains(r#"xsi:type="myg:TreasuryTransferPaymentOrderIo""#));
        assert!(xml.contains("<myg:treasuryCode>101001000</myg:treasuryCode>"));
        assert!(!xml.contains("creditAccount"));
        assert!(!xml.contains("beneficiaryName"));
        assert!(!xml.contains("<myg:description>"));
        assert!(tbcsoap::build_request_envelope("u", "p", "n", &xml).is_ok());
    }

    #[test]
    fn test_response_deserialization() {
        let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Header/><SOAP-ENV:Body><ns2:ImportSinglePaymentOrdersResponseIo xmlns:ns2="http://www.mygemini.com/schemas/mygemini"><ns2:paymentId>1632027071</ns2:paymentId></ns2:ImportSinglePaymentOrdersResponseIo></SOAP-ENV:Body></SOAP-ENV:Envelope>"#;
        let response: ImportSinglePaymentOrdersResponseIo = deserialize_payload(xml).unwrap();
        assert_eq!(response.payment_id, 1632027071);
    }
}
