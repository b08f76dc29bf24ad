use heapless::{String, Vec};

use super::SecurityProfileId;
use crate::command::security::types::{
    CertificateValidationLevel, TlsVersion, SECURITY_NAME_MAX_LEN, SERVER_URL_MAX_LEN, SNI_MAX_LEN,
};
use crate::error::Error;
use crate::modules::{ModuleParams, CIPHER_SUITE_LIST_CAP};

/// +USECPRF accepts profile identifiers in the range 0-4.
pub const SECURITY_PROFILE_COUNT: usize = 5;

/// How the pre-shared key of a profile is provisioned.
///
/// Only the provisioning state is mirrored; the key material is handed to the
/// module and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PskProvisioning {
    #[default]
    None,
    /// A PSK and PSK identity pair was written to the profile
    Provisioned,
    /// The module derives the PSK and PSK identity from its root of trust
    GeneratedByRot,
}

/// Insertion-ordered set of IANA 16-bit cipher suite identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherSuiteSet {
    suites: Vec<u16, CIPHER_SUITE_LIST_CAP>,
}

impl CipherSuiteSet {
    pub const fn new() -> Self {
        Self { suites: Vec::new() }
    }

    pub fn contains(&self, cipher: u16) -> bool {
        self.suites.contains(&cipher)
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Iterates the identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.suites.iter().copied()
    }

    /// Appends `cipher` unless it is already present. `false` when the list
    /// is full.
    pub(crate) fn insert(&mut self, cipher: u16) -> bool {
        if self.contains(cipher) {
            return true;
        }
        self.suites.push(cipher).is_ok()
    }

    /// Removes `cipher` if present, keeping the order of the remaining
    /// entries. `false` if it was not in the set.
    pub(crate) fn remove(&mut self, cipher: u16) -> bool {
        match self.suites.iter().position(|&c| c == cipher) {
            Some(index) => {
                self.suites.remove(index);
                true
            }
            None => false,
        }
    }
}

/// In-memory mirror of one security profile's configuration.
///
/// The mirror is updated only after the corresponding exchange with the
/// module succeeded, so reads never require a command round trip.
#[derive(Debug, Clone)]
pub struct SecurityContext {
    pub(crate) root_ca_certificate_name: String<SECURITY_NAME_MAX_LEN>,
    pub(crate) client_certificate_name: String<SECURITY_NAME_MAX_LEN>,
    pub(crate) client_private_key_name: String<SECURITY_NAME_MAX_LEN>,
    pub(crate) server_name_indication: String<SNI_MAX_LEN>,
    pub(crate) certificate_check_level: CertificateValidationLevel,
    pub(crate) expected_server_url: String<SERVER_URL_MAX_LEN>,
    pub(crate) tls_version: TlsVersion,
    pub(crate) psk: PskProvisioning,
    pub(crate) cipher_suites: CipherSuiteSet,
}

impl SecurityContext {
    /// How the pre-shared key of this profile is provisioned. There is no
    /// accessor for the key material; the module keeps it.
    pub fn psk(&self) -> PskProvisioning {
        self.psk
    }

    /// A context holding the factory-programmed values of `module`.
    pub(crate) fn with_defaults<M: ModuleParams>(module: &M) -> Self {
        Self {
            root_ca_certificate_name: String::new(),
            client_certificate_name: String::new(),
            client_private_key_name: String::new(),
            server_name_indication: String::new(),
            certificate_check_level: module.default_certificate_check_level(),
            expected_server_url: String::new(),
            tls_version: module.default_tls_version(),
            psk: PskProvisioning::None,
            cipher_suites: CipherSuiteSet::new(),
        }
    }
}

/// Owns the live contexts of one cellular connection, indexed by profile id.
#[derive(Debug, Default)]
pub(crate) struct ContextStore {
    slots: [Option<SecurityContext>; SECURITY_PROFILE_COUNT],
}

impl ContextStore {
    pub const fn new() -> Self {
        Self {
            slots: [None, None, None, None, None],
        }
    }

    /// Allocates the lowest free profile slot, populated with the
    /// factory-programmed values of `module`.
    pub fn add<M: ModuleParams>(&mut self, module: &M) -> Result<SecurityProfileId, Error> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(Error::NoFreeProfiles)?;
        self.slots[slot] = Some(SecurityContext::with_defaults(module));
        Ok(SecurityProfileId(slot as u8))
    }

    /// Releases the slot and everything the context owns.
    pub fn remove(&mut self, profile_id: SecurityProfileId) -> Result<(), Error> {
        self.slots
            .get_mut(usize::from(profile_id.0))
            .and_then(Option::take)
            .map(drop)
            .ok_or(Error::InvalidContext)
    }

    pub fn get(&self, profile_id: SecurityProfileId) -> Result<&SecurityContext, Error> {
        self.slots
            .get(usize::from(profile_id.0))
            .and_then(Option::as_ref)
            .ok_or(Error::InvalidContext)
    }

    pub fn get_mut(
        &mut self,
        profile_id: SecurityProfileId,
    ) -> Result<&mut SecurityContext, Error> {
        self.slots
            .get_mut(usize::from(profile_id.0))
            .and_then(Option::as_mut)
            .ok_or(Error::InvalidContext)
    }
}
