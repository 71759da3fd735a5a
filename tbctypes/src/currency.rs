use crate::error::{Result, TypesError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(Cow<'static, str>);

impl Currency {
    pub const GEL: Currency = Currency(Cow::Borrowed("GEL"));
    pub const USD: Currency = Currency(Cow::Borrowed("USD"));
    pub const EUR: Currency = Currency(Cow::Borrowed("EUR"));
    pub const GBP: Currency = Currency(Cow::Borrowed("GBP"));
    pub const CHF: Currency = Currency(Cow::Borrowed("CHF"));
    pub const JPY: Currency = Currency(Cow::Borrowed("JPY"));
    pub const CNY: Currency = Currency(Cow::Borrowed("CNY"));

    /// Validates a currency code (trimmed, upper-cased, three letters)
    pub fn new(code: &str) -> Result<Self> {
        let normalized = code.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(TypesError::EmptyCurrency);
        }
        if normalized.chars().count() != 3 {
            return Err(TypesError::CurrencyLength(normalized));
        }
        if !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TypesError::CurrencyFormat(normalized));
        }
        Ok(Self(Cow::Owned(normalized)))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_code() {
        assert_eq!(Currency::new(" usd ").unwrap(), Currency::USD);
        assert_eq!("gel".parse::<Currency>().unwrap().code(), "GEL");
    }

    #[test]
    fn test_rejects_invalid_codes() {
        assert_eq!(Currency::new(""), Err(TypesError::EmptyCurrency));
        assert!(matches!(
            Currency::new("EURO"),
            Err(TypesError::CurrencyLength(_))
        ));
        assert!(matches!(
            Currency::new("U2D"),
            Err(TypesError::CurrencyFormat(_))
        ));
    }
}
