use super::ModuleParams;
use crate::command::security::types::{CertificateValidationLevel, TlsVersion};

#[derive(Debug, Clone, Copy)]
pub struct SaraR5;

impl ModuleParams for SaraR5 {
    fn supports_iana_cipher_suites(&self) -> bool {
        true
    }
    fn supports_server_name_indication(&self) -> bool {
        true
    }
    fn supports_rot_psk(&self) -> bool {
        true
    }
    fn default_certificate_check_level(&self) -> CertificateValidationLevel {
        CertificateValidationLevel::RootCertValidationWithoutIntegrity
    }
    fn default_tls_version(&self) -> TlsVersion {
        TlsVersion::Tls1_2
    }
}
