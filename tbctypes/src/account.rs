use crate::currency::Currency;
use crate::error::Result;
use crate::iban::Iban;
use std::fmt;

/// Bank account: IBAN (or plain account number) with its currency
///
/// TBC accounts are multi-currency, so the same IBAN combined with GEL and
/// USD designates two different sub-accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BankAccount {
    iban: Iban,
    currency: Currency,
}

impl BankAccount {
    pub fn new(iban: Iban, currency: Currency) -> Self {
        Self { iban, currency }
    }

    /// Parses an account from raw strings
    ///
    /// With `validate_iban = false` the account number is only normalised,
    /// which is what foreign-currency beneficiaries outside the IBAN area need.
    pub fn parse(account_number: &str, currency_code: &str, validate_iban: bool) -> Result<Self> {
        let iban = if validate_iban {
            Iban::new(account_number)?
        } else {
            Iban::without_validation(account_number)?
        };
        let currency = Currency::new(currency_code)?;
        Ok(Self::new(iban, currency))
    }

    pub fn iban(&self) -> &Iban {
        &self.iban
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.iban, self.currency)
    }
}
