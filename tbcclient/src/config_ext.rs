//! TBC account settings stored in `tbcconfig`
//!
//! Keys live under `accounts.tbc`:
//!
//! ```yaml
//! accounts:
//!   tbc:
//!     username: integration_username
//!     password: encrypted:...
//!     certificate_file: certs/company.pfx
//!     certificate_password: encrypted:...
//!     endpoint: https://secdbi.tbconline.ge/dbi/dbiService
//! ```

use crate::credentials::CertificateIdentity;
use crate::transport::DEFAULT_ENDPOINT;
use anyhow::{anyhow, Result};
use serde_yaml::Value;
use std::path::PathBuf;
use tbcconfig::Config;

const USERNAME: &[&str] = &["accounts", "tbc", "username"];
const PASSWORD: &[&str] = &["accounts", "tbc", "password"];
const CERTIFICATE_FILE: &[&str] = &["accounts", "tbc", "certificate_file"];
const CERTIFICATE_PASSWORD: &[&str] = &["accounts", "tbc", "certificate_password"];
const ENDPOINT: &[&str] = &["accounts", "tbc", "endpoint"];

/// Extension trait giving `tbcconfig::Config` TBC specific accessors
///
/// ```rust,ignore
/// use tbcclient::TbcConfigExt;
/// use tbcconfig::get_config;
///
/// let config = get_config();
/// let identity = config.get_tbc_identity()?;
/// ```
pub trait TbcConfigExt {
    fn get_tbc_username(&self) -> Result<String>;

    fn set_tbc_username(&self, username: &str) -> Result<()>;

    /// Password in clear text; `encrypted:` values are decrypted
    fn get_tbc_password(&self) -> Result<String>;

    /// Stores the password as given (plain or `encrypted:`)
    fn set_tbc_password(&self, password: &str) -> Result<()>;

    /// Certificate path; relative paths resolve against the config directory
    fn get_tbc_certificate_file(&self) -> Result<PathBuf>;

    fn set_tbc_certificate_file(&self, file: &str) -> Result<()>;

    /// Certificate password in clear text; `encrypted:` values are decrypted
    fn get_tbc_certificate_password(&self) -> Result<String>;

    fn set_tbc_certificate_password(&self, password: &str) -> Result<()>;

    /// Endpoint URL, the public DBI endpoint when unset
    fn get_tbc_endpoint(&self) -> String;

    fn set_tbc_endpoint(&self, endpoint: &str) -> Result<()>;

    /// All four settings, validated
    fn get_tbc_identity(&self) -> crate::Result<CertificateIdentity>;
}

fn required(config: &Config, path: &[&str], what: &str) -> Result<String> {
    config
        .get_string(path)
        .ok_or_else(|| anyhow!("TBC {} not configured", what))
}

fn secret(config: &Config, path: &[&str], what: &str) -> Result<String> {
    let stored = required(config, path, what)?;
    tbcconfig::encryption::get_password(&stored)
        .map_err(|e| anyhow!("Failed to decrypt TBC {}: {}", what, e))
}

impl TbcConfigExt for Config {
    fn get_tbc_username(&self) -> Result<String> {
        required(self, USERNAME, "username")
    }

    fn set_tbc_username(&self, username: &str) -> Result<()> {
        self.set_value(USERNAME, Value::String(username.to_string()))
    }

    fn get_tbc_password(&self) -> Result<String> {
        secret(self, PASSWORD, "password")
    }

    fn set_tbc_password(&self, password: &str) -> Result<()> {
        self.set_value(PASSWORD, Value::String(password.to_string()))
    }

    fn get_tbc_certificate_file(&self) -> Result<PathBuf> {
        let file = required(self, CERTIFICATE_FILE, "certificate file")?;
        Ok(self.resolve_path(file.trim()))
    }

    fn set_tbc_certificate_file(&self, file: &str) -> Result<()> {
        self.set_value(CERTIFICATE_FILE, Value::String(file.to_string()))
    }

    fn get_tbc_certificate_password(&self) -> Result<String> {
        secret(self, CERTIFICATE_PASSWORD, "certificate password")
    }

    fn set_tbc_certificate_password(&self, password: &str) -> Result<()> {
        self.set_value(CERTIFICATE_PASSWORD, Value::String(password.to_string()))
    }

    fn get_tbc_endpoint(&self) -> String {
        self.get_string(ENDPOINT)
            .map(|endpoint| endpoint.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    fn set_tbc_endpoint(&self, endpoint: &str) -> Result<()> {
        self.set_value(ENDPOINT, Value::String(endpoint.to_string()))
    }

    fn get_tbc_identity(&self) -> crate::Result<CertificateIdentity> {
        let username = self.get_tbc_username()?;
        let password = self.get_tbc_password()?;
        let certificate_file = self.get_tbc_certificate_file()?;
        let certificate_password = self.get_tbc_certificate_password()?;

        CertificateIdentity::create(&username, &password, certificate_file, &certificate_password)
    }
}
