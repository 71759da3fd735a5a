//! Username/password and PKCS#12 client certificate settings

use crate::error::{Result, TbcError};
use std::fmt;
use std::path::{Path, PathBuf};

/// WS-Security username and password
///
/// Both values must contain something other than whitespace. The username is
/// trimmed, the password is kept as given.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Result<Self> {
        if username.trim().is_empty() {
            return Err(TbcError::Construction("Username cannot be empty".into()));
        }
        if password.trim().is_empty() {
            return Err(TbcError::Construction("Password cannot be empty".into()));
        }

        Ok(Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Credentials plus the `.pfx` client certificate used for mutual TLS
///
/// Only the file name is checked here; the file is opened when a call is made.
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateIdentity {
    credentials: Credentials,
    certificate_file: PathBuf,
    certificate_password: String,
}

impl CertificateIdentity {
    pub fn new(
        credentials: Credentials,
        certificate_file: impl AsRef<Path>,
        certificate_password: &str,
    ) -> Result<Self> {
        let file = certificate_file.as_ref().to_string_lossy().trim().to_string();

        if file.is_empty() {
            return Err(TbcError::Construction(
                "Certificate file name cannot be empty".into(),
            ));
        }
        if !file.to_ascii_lowercase().ends_with(".pfx") {
            return Err(TbcError::Construction(
                "Certificate must have a '.pfx' extension".into(),
            ));
        }
        if certificate_password.trim().is_empty() {
            return Err(TbcError::Construction(
                "Certificate password cannot be empty".into(),
            ));
        }

        Ok(Self {
            credentials,
            certificate_file: PathBuf::from(file),
            certificate_password: certificate_password.to_string(),
        })
    }

    /// Validates all four settings at once
    pub fn create(
        username: &str,
        password: &str,
        certificate_file: impl AsRef<Path>,
        certificate_password: &str,
    ) -> Result<Self> {
        let credentials = Credentials::new(username, password)?;
        Self::new(credentials, certificate_file, certificate_password)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn certificate_file(&self) -> &Path {
        &self.certificate_file
    }

    pub fn certificate_password(&self) -> &str {
        &self.certificate_password
    }
}

impl fmt::Debug for CertificateIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateIdentity")
            .field("credentials", &self.credentials)
            .field("certificate_file", &self.certificate_file)
            .field("certificate_password", &"***")
            .finish()
    }
}
