use crate::error::{Result, TypesError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_IBAN_LENGTH: usize = 15;
const MAX_IBAN_LENGTH: usize = 34;

static IBAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}\d{2}[A-Z0-9]+$").expect("static IBAN pattern"));

/// International Bank Account Number
///
/// Stored without spaces and upper-cased. Foreign beneficiaries may have
/// account numbers that are not IBANs at all; those go through
/// [`Iban::without_validation`], which only normalises.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Validates and normalises an IBAN
    pub fn new(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(TypesError::EmptyIban);
        }

        let normalized = normalize(value);
        let actual = normalized.len();
        if !(MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&actual) {
            return Err(TypesError::IbanLength {
                min: MIN_IBAN_LENGTH,
                max: MAX_IBAN_LENGTH,
                actual,
            });
        }

        if !IBAN_PATTERN.is_match(&normalized) {
            return Err(TypesError::IbanFormat(normalized));
        }

        Ok(Self(normalized))
    }

    /// Normalises an account number without checking the IBAN format
    pub fn without_validation(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(TypesError::EmptyAccountNumber);
        }
        Ok(Self(normalize(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize(value: &str) -> String {
    value.replace(' ', "").trim().to_uppercase()
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Iban {
    type Error = TypesError;

    // Values coming back from the bank are not always IBANs (foreign
    // partners), so deserialisation only normalises.
    fn try_from(value: String) -> Result<Self> {
        Self::without_validation(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}
