mod lara_r6;
mod lena_r8;
mod sara_r410m;
mod sara_r412m;
mod sara_r422;
mod sara_r5;
mod sara_u201;
mod toby_r2;

pub use lara_r6::LaraR6;
pub use lena_r8::LenaR8;
pub use sara_r410m::SaraR410m;
pub use sara_r412m::SaraR412m;
pub use sara_r422::SaraR422;
pub use sara_r5::SaraR5;
pub use sara_u201::SaraU201;
pub use toby_r2::TobyR2;

use crate::command::general::responses::ModelId;
use crate::command::security::types::{CertificateValidationLevel, TlsVersion};

/// Number of entries the cipher suite list of a profile can hold on modules
/// accepting IANA numbering.
pub const CIPHER_SUITE_LIST_CAP: usize = 16;

/// An optional security feature a module variant may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feature {
    /// Cipher suite selection using the IANA 16-bit enumeration
    IanaCipherSuites,
    /// The SNI (Server Name Indication) negotiation header
    ServerNameIndication,
    /// PSK and PSK identity generation by the module's root of trust
    RotPresharedKey,
}

pub trait ModuleParams: Copy {
    /// Whether +USECPRF accepts cipher suites by their IANA 16-bit code.
    /// Modules without this use the legacy enumeration, one suite at a time.
    fn supports_iana_cipher_suites(&self) -> bool {
        false
    }

    /// Whether the SNI negotiation header can be configured
    fn supports_server_name_indication(&self) -> bool {
        false
    }

    /// Whether PSK material can be derived by the module's root of trust
    fn supports_rot_psk(&self) -> bool {
        false
    }

    /// The factory-programmed certificate validation level
    fn default_certificate_check_level(&self) -> CertificateValidationLevel {
        CertificateValidationLevel::NoValidation
    }

    /// The factory-programmed minimum TLS version
    fn default_tls_version(&self) -> TlsVersion {
        TlsVersion::Any
    }

    /// How many cipher suites one security profile can hold
    fn max_cipher_suites(&self) -> usize {
        if self.supports_iana_cipher_suites() {
            CIPHER_SUITE_LIST_CAP
        } else {
            1
        }
    }

    /// Whether the named optional feature is supported
    fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::IanaCipherSuites => self.supports_iana_cipher_suites(),
            Feature::ServerNameIndication => self.supports_server_name_indication(),
            Feature::RotPresharedKey => self.supports_rot_psk(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Module {
    LaraR6(LaraR6),
    LenaR8(LenaR8),
    SaraR410m(SaraR410m),
    SaraR412m(SaraR412m),
    SaraR422(SaraR422),
    SaraR5(SaraR5),
    SaraU201(SaraU201),
    TobyR2(TobyR2),
    Generic(Generic),
}

impl Module {
    pub fn from_model_id(model_id: &ModelId) -> Self {
        match model_id.model.as_bytes() {
            b if b.starts_with(b"LARA-R6") => Self::LaraR6(LaraR6),
            b if b.starts_with(b"LENA-R8") => Self::LenaR8(LenaR8),
            b if b.starts_with(b"SARA-R410M") => Self::SaraR410m(SaraR410m),
            b if b.starts_with(b"SARA-R412M") => Self::SaraR412m(SaraR412m),
            b if b.starts_with(b"SARA-R422") => Self::SaraR422(SaraR422),
            b if b.starts_with(b"SARA-R5") => Self::SaraR5(SaraR5),
            b if b.starts_with(b"SARA-U201") => Self::SaraU201(SaraU201),
            b if b.starts_with(b"TOBY-R2") => Self::TobyR2(TobyR2),
            id => {
                warn!(
                    "Attempting to run {:?} using generic module parameters! This may or may not work.",
                    id
                );
                Self::Generic(Generic)
            }
        }
    }
}

macro_rules! inner {
    ($self: ident, $fn: ident) => {
        match $self {
            Self::LaraR6(inner) => inner.$fn(),
            Self::LenaR8(inner) => inner.$fn(),
            Self::SaraR410m(inner) => inner.$fn(),
            Self::SaraR412m(inner) => inner.$fn(),
            Self::SaraR422(inner) => inner.$fn(),
            Self::SaraR5(inner) => inner.$fn(),
            Self::SaraU201(inner) => inner.$fn(),
            Self::TobyR2(inner) => inner.$fn(),
            Self::Generic(inner) => inner.$fn(),
        }
    };
}

impl ModuleParams for Module {
    fn supports_iana_cipher_suites(&self) -> bool {
        inner!(self, supports_iana_cipher_suites)
    }

    fn supports_server_name_indication(&self) -> bool {
        inner!(self, supports_server_name_indication)
    }

    fn supports_rot_psk(&self) -> bool {
        inner!(self, supports_rot_psk)
    }

    fn default_certificate_check_level(&self) -> CertificateValidationLevel {
        inner!(self, default_certificate_check_level)
    }

    fn default_tls_version(&self) -> TlsVersion {
        inner!(self, default_tls_version)
    }

    fn max_cipher_suites(&self) -> usize {
        inner!(self, max_cipher_suites)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Generic;

impl ModuleParams for Generic {}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    fn model(name: &str) -> ModelId {
        ModelId {
            model: String::try_from(name).unwrap(),
        }
    }

    #[test]
    fn model_strings_map_to_variants() {
        assert!(matches!(
            Module::from_model_id(&model("SARA-R510M8S")),
            Module::SaraR5(_)
        ));
        assert!(matches!(
            Module::from_model_id(&model("SARA-R410M-02B")),
            Module::SaraR410m(_)
        ));
        assert!(matches!(
            Module::from_model_id(&model("LARA-R6001D")),
            Module::LaraR6(_)
        ));
        assert!(matches!(
            Module::from_model_id(&model("SARA-U201")),
            Module::SaraU201(_)
        ));
    }

    #[test]
    fn unknown_model_falls_back_to_generic() {
        let module = Module::from_model_id(&model("NINA-W152"));
        assert!(matches!(module, Module::Generic(_)));
        // The fallback must stay conservative
        assert!(!module.supports(Feature::IanaCipherSuites));
        assert!(!module.supports(Feature::ServerNameIndication));
        assert!(!module.supports(Feature::RotPresharedKey));
        assert_eq!(
            module.default_certificate_check_level(),
            CertificateValidationLevel::NoValidation
        );
        assert_eq!(module.default_tls_version(), TlsVersion::Any);
    }

    #[test]
    fn cipher_capacity_follows_numbering_scheme() {
        assert_eq!(Module::SaraU201(SaraU201).max_cipher_suites(), 1);
        assert_eq!(Module::TobyR2(TobyR2).max_cipher_suites(), 1);
        assert_eq!(
            Module::SaraR5(SaraR5).max_cipher_suites(),
            CIPHER_SUITE_LIST_CAP
        );
    }

    #[test]
    fn sara_r5_overrides_factory_defaults() {
        let module = Module::SaraR5(SaraR5);
        assert_eq!(
            module.default_certificate_check_level(),
            CertificateValidationLevel::RootCertValidationWithoutIntegrity
        );
        assert_eq!(module.default_tls_version(), TlsVersion::Tls1_2);
    }
}
