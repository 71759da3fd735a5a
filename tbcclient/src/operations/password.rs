//! ChangePassword: new password confirmed by a digipass code

use crate::operation::{ServiceAction, SoapRequest};
use serde::Deserialize;
use std::fmt;
use tbcsoap::{xml_escape, SoapResponse};

/// Password change, authorised by a digipass code
///
/// The digipass code travels as the `UsernameToken` nonce.
#[derive(Clone, PartialEq, Eq)]
pub struct ChangePasswordRequestIo {
    pub new_password: String,
    pub digipass_code: String,
}

impl ChangePasswordRequestIo {
    pub fn new(new_password: impl Into<String>, digipass_code: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
            digipass_code: digipass_code.into(),
        }
    }
}

impl fmt::Debug for ChangePasswordRequestIo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequestIo")
            .field("new_password", &"***")
            .field("digipass_code", &self.digipass_code)
            .finish()
    }
}

impl SoapRequest for ChangePasswordRequestIo {
    type Response = ChangePasswordResponseIo;

    fn action(&self) -> ServiceAction {
        ServiceAction::ChangePassword
    }

    fn soap_xml(&self) -> String {
        format!(
            r#"<myg:ChangePasswordRequestIo>
   <myg:newPassword>{}</myg:newPassword>
 </myg:ChangePasswordRequestIo>"#,
            xml_escape(&self.new_password)
        )
    }

    fn nonce(&self) -> String {
        self.digipass_code.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordResponseIo {
    #[serde(default)]
    pub message: Option<String>,
}

impl SoapResponse for ChangePasswordResponseIo {
    const ELEMENT: &'static str = "ChangePasswordResponseIo";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationDescriptor;

    #[test]
    fn test_nonce_is_digipass_code() {
        let request = ChangePasswordRequestIo::new("n3w<pass>", "123456789");
        let descriptor = OperationDescriptor::from_request(&request);

        assert_eq!(descriptor.nonce(), "123456789");
        assert_eq!(descriptor.action(), ServiceAction::ChangePassword);
        assert!(descriptor
            .body()
            .contains("<myg:newPassword>n3w&lt;pass&gt;</myg:newPassword>"));
    }

    #[test]
    fn test_debug_hides_new_password() {
        let request = ChangePasswordRequestIo::new("secret-pass", "123456789");
        assert!(!format!("{:?}", request).contains("secret-pass"));
    }

    #[test]
    fn test_response() {
        let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Body><ns2:ChangePasswordResponseIo xmlns:ns2="http://www.mygemini.com/schemas/mygemini" xmlns:i="http://www.w3.org/2001/XMLSchema-instance"><ns2:message>Password changed</ns2:message></ns2:ChangePasswordResponseIo></SOAP-ENV:Body></SOAP-ENV:Envelope>"#;
        let response: ChangePasswordResponseIo = tbcsoap::deserialize_payload(xml).unwrap();
        assert_eq!(response.message.as_deref(), Some("Password changed"));
    }
}
