//! TLS/DTLS security profile management.
//!
//! [`SecurityService`] turns per-field configuration calls into the
//! `AT+USECPRF` exchanges understood by the module, keeping a local mirror of
//! every live profile so that reads do not require a command round trip. The
//! set of supported knobs differs between module variants (cipher suite
//! numbering scheme, SNI, root-of-trust key generation, factory defaults);
//! the service consults [`ModuleParams`] for all of these and never branches
//! on the variant itself.

pub mod context;

use core::cell::Cell;

use atat::atat_derive::AtatLen;
use atat::blocking::AtatClient;
use heapless::String;
use serde::{Deserialize, Serialize};

use crate::command::general::GetModelId;
use crate::command::security::types::{
    CertificateValidationLevel, CipherSuiteSetting, RotGeneratedPsk, SecurityProfileOperation,
    TlsVersion, KEY_PASSWORD_MAX_LEN, PSK_ID_MAX_LEN, PSK_MAX_LEN, SERVER_URL_MAX_LEN,
};
use crate::command::security::SecurityProfileManager;
use crate::error::Error;
use crate::modules::{Feature, Module, ModuleParams};

use context::ContextStore;
pub use context::{
    CipherSuiteSet, PskProvisioning, SecurityContext, SECURITY_PROFILE_COUNT,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, AtatLen)]
pub struct SecurityProfileId(pub u8);

/// Server certificate checking policy of a profile, together with the
/// parameter required by the URL-carrying levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CertificateCheck<'a> {
    /// The server certificate is not checked or verified
    None,
    /// Validation against the imported trusted root certificates
    RootCa,
    /// Root CA validation plus an integrity check of the server URL
    RootCaUrl(&'a str),
    /// Root CA and URL validation plus a certificate validity date check
    RootCaUrlDate(&'a str),
}

impl CertificateCheck<'_> {
    fn level(&self) -> CertificateValidationLevel {
        match self {
            Self::None => CertificateValidationLevel::NoValidation,
            Self::RootCa => CertificateValidationLevel::RootCertValidationWithoutIntegrity,
            Self::RootCaUrl(_) => CertificateValidationLevel::RootCertValidationWithIntegrity,
            Self::RootCaUrlDate(_) => {
                CertificateValidationLevel::RootCertValidationWithValidityDate
            }
        }
    }

    fn url(&self) -> Option<&str> {
        match *self {
            Self::None | Self::RootCa => None,
            Self::RootCaUrl(url) | Self::RootCaUrlDate(url) => Some(url),
        }
    }
}

/// Driver for the TLS/DTLS security profiles of one cellular connection.
///
/// All configuration exchanges go through the connection's AT interface, one
/// outstanding command at a time; mutating accessors borrow the service
/// exclusively for the duration of the round trip and may block until the
/// command timeout expires. Services of different connections are fully
/// independent.
///
/// Every failing operation additionally records its error in the service's
/// last-error slot, retrievable out-of-band with
/// [`take_last_error`](Self::take_last_error).
pub struct SecurityService<AT: AtatClient> {
    at: AT,
    module: Module,
    store: ContextStore,
    last_error: Cell<Option<Error>>,
}

impl<AT: AtatClient> SecurityService<AT> {
    pub fn new(at: AT, module: Module) -> Self {
        Self {
            at,
            module,
            store: ContextStore::new(),
            last_error: Cell::new(None),
        }
    }

    /// Creates the service by asking the module what it is (`AT+CGMM`).
    /// Unknown models fall back to conservative generic parameters.
    pub fn with_detected_module(mut at: AT) -> Result<Self, Error> {
        let model_id = at.send(&GetModelId)?;
        Ok(Self::new(at, Module::from_model_id(&model_id)))
    }

    /// The module variant this service answers capability queries for.
    pub fn module(&self) -> Module {
        self.module
    }

    /// Releases the AT interface.
    pub fn release(self) -> AT {
        self.at
    }

    /// Returns the most recent error recorded by an operation of this
    /// service and clears the slot. `None` when everything since the last
    /// call succeeded.
    pub fn take_last_error(&self) -> Option<Error> {
        self.last_error.take()
    }

    fn latch<T>(&self, res: Result<T, Error>) -> Result<T, Error> {
        if let Err(e) = &res {
            self.last_error.set(Some(e.clone()));
        }
        res
    }

    /// Creates a security context on the lowest free profile slot and resets
    /// that profile to the module's factory-programmed values.
    pub fn add_context(&mut self) -> Result<SecurityProfileId, Error> {
        let res = self.try_add_context();
        self.latch(res)
    }

    fn try_add_context(&mut self) -> Result<SecurityProfileId, Error> {
        let profile_id = self.store.add(&self.module)?;
        if let Err(e) = self.at.send(&SecurityProfileManager {
            profile_id,
            operation: None,
        }) {
            // Roll the slot back; the profile was never reset on the module
            let _ = self.store.remove(profile_id);
            return Err(e.into());
        }
        debug!("Added security context on profile {}", profile_id.0);
        Ok(profile_id)
    }

    /// Removes the context and everything it owns. The profile slot becomes
    /// available to a later [`add_context`](Self::add_context), which starts
    /// it over from the factory defaults; the module is not contacted.
    pub fn remove_context(&mut self, profile_id: SecurityProfileId) -> Result<(), Error> {
        let res = self.store.remove(profile_id);
        self.latch(res)
    }

    /// Resets a live context to the module's factory-programmed values, both
    /// on the module and in the mirror.
    pub fn reset_context(&mut self, profile_id: SecurityProfileId) -> Result<(), Error> {
        let res = self.try_reset_context(profile_id);
        self.latch(res)
    }

    fn try_reset_context(&mut self, profile_id: SecurityProfileId) -> Result<(), Error> {
        self.store.get(profile_id)?;
        self.at.send(&SecurityProfileManager {
            profile_id,
            operation: None,
        })?;
        *self.store.get_mut(profile_id)? = SecurityContext::with_defaults(&self.module);
        Ok(())
    }

    /// Sets the internal name of the trusted root certificate used to verify
    /// the server. The credential itself must already be present on the
    /// module's file system.
    pub fn set_root_ca_certificate_name(
        &mut self,
        profile_id: SecurityProfileId,
        name: &str,
    ) -> Result<(), Error> {
        let res = self.set_name_field(
            profile_id,
            name,
            SecurityProfileOperation::TrustedRootCertificateInternalName,
            |ctx| &mut ctx.root_ca_certificate_name,
        );
        self.latch(res)
    }

    /// The internal name of the trusted root certificate; empty when unset.
    pub fn get_root_ca_certificate_name(
        &self,
        profile_id: SecurityProfileId,
    ) -> Result<&str, Error> {
        let res = self
            .store
            .get(profile_id)
            .map(|ctx| ctx.root_ca_certificate_name.as_str());
        self.latch(res)
    }

    /// Sets the internal name of the client certificate presented to the
    /// server for mutual authentication.
    pub fn set_client_certificate_name(
        &mut self,
        profile_id: SecurityProfileId,
        name: &str,
    ) -> Result<(), Error> {
        let res = self.set_name_field(
            profile_id,
            name,
            SecurityProfileOperation::ClientCertificateInternalName,
            |ctx| &mut ctx.client_certificate_name,
        );
        self.latch(res)
    }

    /// The internal name of the client certificate; empty when unset.
    pub fn get_client_certificate_name(
        &self,
        profile_id: SecurityProfileId,
    ) -> Result<&str, Error> {
        let res = self
            .store
            .get(profile_id)
            .map(|ctx| ctx.client_certificate_name.as_str());
        self.latch(res)
    }

    /// Sets the internal name of the client private key and, when the key is
    /// password protected, its password. The password is forwarded to the
    /// module and not mirrored.
    pub fn set_client_private_key_name(
        &mut self,
        profile_id: SecurityProfileId,
        name: &str,
        password: Option<&str>,
    ) -> Result<(), Error> {
        let res = self.try_set_client_private_key_name(profile_id, name, password);
        self.latch(res)
    }

    fn try_set_client_private_key_name(
        &mut self,
        profile_id: SecurityProfileId,
        name: &str,
        password: Option<&str>,
    ) -> Result<(), Error> {
        let password = match password {
            Some(p) => {
                Some(String::<KEY_PASSWORD_MAX_LEN>::try_from(p).map_err(|_| Error::NameTooLong)?)
            }
            None => None,
        };
        self.set_name_field(
            profile_id,
            name,
            SecurityProfileOperation::ClientPrivateKeyInternalName,
            |ctx| &mut ctx.client_private_key_name,
        )?;
        if let Some(password) = password {
            self.at.send(&SecurityProfileManager {
                profile_id,
                operation: Some(SecurityProfileOperation::ClientPrivateKeyPassword(password)),
            })?;
        }
        Ok(())
    }

    /// The internal name of the client private key; empty when unset.
    pub fn get_client_private_key_name(
        &self,
        profile_id: SecurityProfileId,
    ) -> Result<&str, Error> {
        let res = self
            .store
            .get(profile_id)
            .map(|ctx| ctx.client_private_key_name.as_str());
        self.latch(res)
    }

    /// Configures the pre-shared key of the profile.
    ///
    /// Exactly one of two shapes is accepted: a PSK together with its
    /// identity, or neither of them with `generate_from_rot` set on module
    /// variants that can derive the pair from their root of trust. The key
    /// material is written to the module and not retained, so there is no
    /// corresponding getter.
    pub fn set_client_psk(
        &mut self,
        profile_id: SecurityProfileId,
        psk: Option<&str>,
        psk_id: Option<&str>,
        generate_from_rot: bool,
    ) -> Result<(), Error> {
        let res = self.try_set_client_psk(profile_id, psk, psk_id, generate_from_rot);
        self.latch(res)
    }

    fn try_set_client_psk(
        &mut self,
        profile_id: SecurityProfileId,
        psk: Option<&str>,
        psk_id: Option<&str>,
        generate_from_rot: bool,
    ) -> Result<(), Error> {
        self.store.get(profile_id)?;
        match (psk, psk_id, generate_from_rot) {
            (None | Some(""), None | Some(""), true) => {
                if !self.module.supports_rot_psk() {
                    return Err(Error::Unsupported(Feature::RotPresharedKey));
                }
                self.at.send(&SecurityProfileManager {
                    profile_id,
                    operation: Some(SecurityProfileOperation::PskGeneratedByRot(
                        RotGeneratedPsk::Enabled,
                    )),
                })?;
                self.store.get_mut(profile_id)?.psk = PskProvisioning::GeneratedByRot;
                Ok(())
            }
            (Some(psk), Some(psk_id), false) if !psk.is_empty() && !psk_id.is_empty() => {
                let psk =
                    String::<PSK_MAX_LEN>::try_from(psk).map_err(|_| Error::NameTooLong)?;
                let psk_id =
                    String::<PSK_ID_MAX_LEN>::try_from(psk_id).map_err(|_| Error::NameTooLong)?;
                self.at.send(&SecurityProfileManager {
                    profile_id,
                    operation: Some(SecurityProfileOperation::PresharedKey(psk)),
                })?;
                self.at.send(&SecurityProfileManager {
                    profile_id,
                    operation: Some(SecurityProfileOperation::PresharedKeyIdentity(psk_id)),
                })?;
                self.store.get_mut(profile_id)?.psk = PskProvisioning::Provisioned;
                Ok(())
            }
            _ => Err(Error::InvalidPsk),
        }
    }

    /// Adds a cipher suite, by its IANA code, to the set the profile may
    /// negotiate. Adding a code that is already present is a no-op.
    ///
    /// Module variants without IANA numbering hold a single suite at a time
    /// and only accept codes from their legacy enumeration.
    pub fn add_cipher_suite(
        &mut self,
        profile_id: SecurityProfileId,
        cipher: u16,
    ) -> Result<(), Error> {
        let res = self.try_add_cipher_suite(profile_id, cipher);
        self.latch(res)
    }

    fn try_add_cipher_suite(
        &mut self,
        profile_id: SecurityProfileId,
        cipher: u16,
    ) -> Result<(), Error> {
        let ctx = self.store.get(profile_id)?;
        if ctx.cipher_suites.contains(cipher) {
            return Ok(());
        }
        let setting = if self.module.supports_iana_cipher_suites() {
            CipherSuiteSetting::iana_add(cipher)
        } else {
            CipherSuiteSetting::from_iana(cipher).ok_or(Error::InvalidCipherSuite)?
        };
        if ctx.cipher_suites.len() >= self.module.max_cipher_suites() {
            return Err(Error::CipherListFull);
        }
        self.at.send(&SecurityProfileManager {
            profile_id,
            operation: Some(SecurityProfileOperation::CipherSuite(setting)),
        })?;
        self.store.get_mut(profile_id)?.cipher_suites.insert(cipher);
        Ok(())
    }

    /// Removes a cipher suite from the set; codes that are not present are a
    /// no-op.
    pub fn remove_cipher_suite(
        &mut self,
        profile_id: SecurityProfileId,
        cipher: u16,
    ) -> Result<(), Error> {
        let res = self.try_remove_cipher_suite(profile_id, cipher);
        self.latch(res)
    }

    fn try_remove_cipher_suite(
        &mut self,
        profile_id: SecurityProfileId,
        cipher: u16,
    ) -> Result<(), Error> {
        if !self.store.get(profile_id)?.cipher_suites.contains(cipher) {
            return Ok(());
        }
        let setting = if self.module.supports_iana_cipher_suites() {
            CipherSuiteSetting::iana_remove(cipher)
        } else {
            // The single legacy slot is cleared by restoring automatic
            // negotiation
            CipherSuiteSetting::Automatic
        };
        self.at.send(&SecurityProfileManager {
            profile_id,
            operation: Some(SecurityProfileOperation::CipherSuite(setting)),
        })?;
        self.store.get_mut(profile_id)?.cipher_suites.remove(cipher);
        Ok(())
    }

    /// Iterates the configured cipher suites in the order they were added.
    /// An empty set leaves the negotiation to the module.
    pub fn cipher_suites(
        &self,
        profile_id: SecurityProfileId,
    ) -> Result<impl Iterator<Item = u16> + '_, Error> {
        let res = self
            .store
            .get(profile_id)
            .map(|ctx| ctx.cipher_suites.iter());
        self.latch(res)
    }

    /// Requires `version` as the minimum TLS version for the handshake.
    pub fn set_tls_version(
        &mut self,
        profile_id: SecurityProfileId,
        version: TlsVersion,
    ) -> Result<(), Error> {
        let res = self.try_set_tls_version(profile_id, version);
        self.latch(res)
    }

    fn try_set_tls_version(
        &mut self,
        profile_id: SecurityProfileId,
        version: TlsVersion,
    ) -> Result<(), Error> {
        self.store.get(profile_id)?;
        self.at.send(&SecurityProfileManager {
            profile_id,
            operation: Some(SecurityProfileOperation::TlsVersion(version)),
        })?;
        self.store.get_mut(profile_id)?.tls_version = version;
        Ok(())
    }

    pub fn get_tls_version(&self, profile_id: SecurityProfileId) -> Result<TlsVersion, Error> {
        let res = self.store.get(profile_id).map(|ctx| ctx.tls_version);
        self.latch(res)
    }

    /// Sets the server certificate checking policy. The URL-carrying levels
    /// configure the expected server URL in the same call.
    pub fn set_certificate_check(
        &mut self,
        profile_id: SecurityProfileId,
        check: CertificateCheck<'_>,
    ) -> Result<(), Error> {
        let res = self.try_set_certificate_check(profile_id, check);
        self.latch(res)
    }

    fn try_set_certificate_check(
        &mut self,
        profile_id: SecurityProfileId,
        check: CertificateCheck<'_>,
    ) -> Result<(), Error> {
        let url = match check.url() {
            Some(url) => {
                Some(String::<SERVER_URL_MAX_LEN>::try_from(url).map_err(|_| Error::NameTooLong)?)
            }
            None => None,
        };
        self.store.get(profile_id)?;
        self.at.send(&SecurityProfileManager {
            profile_id,
            operation: Some(SecurityProfileOperation::CertificateValidationLevel(
                check.level(),
            )),
        })?;
        if let Some(url) = &url {
            self.at.send(&SecurityProfileManager {
                profile_id,
                operation: Some(SecurityProfileOperation::ExpectedServerUrl(url.clone())),
            })?;
        }
        let ctx = self.store.get_mut(profile_id)?;
        ctx.certificate_check_level = check.level();
        ctx.expected_server_url = url.unwrap_or_default();
        Ok(())
    }

    /// The checking policy of the profile, with the stored URL parameter for
    /// the levels that carry one.
    pub fn get_certificate_check(
        &self,
        profile_id: SecurityProfileId,
    ) -> Result<CertificateCheck<'_>, Error> {
        let res = self.store.get(profile_id).map(|ctx| {
            match ctx.certificate_check_level {
                CertificateValidationLevel::NoValidation => CertificateCheck::None,
                CertificateValidationLevel::RootCertValidationWithoutIntegrity => {
                    CertificateCheck::RootCa
                }
                CertificateValidationLevel::RootCertValidationWithIntegrity => {
                    CertificateCheck::RootCaUrl(ctx.expected_server_url.as_str())
                }
                CertificateValidationLevel::RootCertValidationWithValidityDate => {
                    CertificateCheck::RootCaUrlDate(ctx.expected_server_url.as_str())
                }
            }
        });
        self.latch(res)
    }

    /// Sets the host name sent in the SNI extension of the handshake. Fails
    /// on module variants without SNI support.
    pub fn set_server_name_indication(
        &mut self,
        profile_id: SecurityProfileId,
        server_name: &str,
    ) -> Result<(), Error> {
        let res = if self.module.supports_server_name_indication() {
            self.set_name_field(
                profile_id,
                server_name,
                SecurityProfileOperation::ServerNameIndication,
                |ctx| &mut ctx.server_name_indication,
            )
        } else {
            Err(Error::Unsupported(Feature::ServerNameIndication))
        };
        self.latch(res)
    }

    /// The configured SNI host name; empty when unset. On module variants
    /// without SNI support this is an error, not an empty value.
    pub fn get_server_name_indication(
        &self,
        profile_id: SecurityProfileId,
    ) -> Result<&str, Error> {
        let res = if self.module.supports_server_name_indication() {
            self.store
                .get(profile_id)
                .map(|ctx| ctx.server_name_indication.as_str())
        } else {
            Err(Error::Unsupported(Feature::ServerNameIndication))
        };
        self.latch(res)
    }

    /// Validates and transfers one bounded string field, then mirrors it.
    fn set_name_field<const N: usize>(
        &mut self,
        profile_id: SecurityProfileId,
        value: &str,
        operation: fn(String<N>) -> SecurityProfileOperation,
        mirror: fn(&mut SecurityContext) -> &mut String<N>,
    ) -> Result<(), Error> {
        let value = String::try_from(value).map_err(|_| Error::NameTooLong)?;
        self.store.get(profile_id)?;
        self.at.send(&SecurityProfileManager {
            profile_id,
            operation: Some(operation(value.clone())),
        })?;
        *mirror(self.store.get_mut(profile_id)?) = value;
        Ok(())
    }
}
