//! # tbctypes - Bank value objects
//!
//! Immutable, validated value types shared by the TBC DBI client:
//!
//! - [`Iban`] : normalised International Bank Account Number
//! - [`Currency`] : ISO 4217 three-letter code
//! - [`BankAccount`] : IBAN + currency pair, the unit every payment order uses
//! - [`Period`] : inclusive date range used by movement queries
//!
//! Every constructor validates and normalises its input, so a value that
//! exists is always safe to embed in a SOAP request.
//!
//! ```
//! use tbctypes::{BankAccount, Currency};
//!
//! let account = BankAccount::parse("ge31 tb74 6793 6080 1000 03", "gel", true)?;
//! assert_eq!(account.iban().as_str(), "GE31TB7467936080100003");
//! assert_eq!(account.currency(), &Currency::GEL);
//! # Ok::<(), tbctypes::TypesError>(())
//! ```

mod account;
mod currency;
mod error;
mod iban;
mod period;

pub use account::BankAccount;
pub use currency::Currency;
pub use error::{Result, TypesError};
pub use iban::Iban;
pub use period::Period;
