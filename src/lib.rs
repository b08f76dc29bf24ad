#![cfg_attr(not(test), no_std)]

//! # u-blox cellular TLS security
//!
//! Configuration driver for the TLS/DTLS security profiles (`AT+USECPRF`) of
//! u-blox cellular modules. A [`SecurityService`] owns the security contexts
//! of one cellular connection and maps per-field configuration calls onto the
//! module's command set, answering capability questions (cipher suite
//! numbering scheme, SNI, root-of-trust PSK generation, factory defaults)
//! from the per-variant tables in [`modules`].
//!
//! The crate only names and transfers credential identifiers and TLS
//! parameters; the credentials themselves live on the module's file system
//! and the module's own TLS stack performs the handshake.
//!
//! ```toml
//! ublox-sec-tls = "0.1"
//! ```
//!
//! ```ignore
//! use ublox_sec_tls::prelude::*;
//! use ublox_sec_tls::{CertificateCheck, SecurityService, TlsVersion};
//!
//! let mut security = SecurityService::with_detected_module(at_client)?;
//! let profile = security.add_context()?;
//! security.set_root_ca_certificate_name(profile, "rootCA")?;
//! security.set_tls_version(profile, TlsVersion::Tls1_2)?;
//! security.set_certificate_check(profile, CertificateCheck::RootCa)?;
//! ```

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod command;
pub mod error;
pub mod modules;
pub mod services;

#[cfg(test)]
mod test_helpers;

pub use command::security::types::{
    CertificateValidationLevel, TlsVersion, KEY_PASSWORD_MAX_LEN, PSK_ID_MAX_LEN, PSK_MAX_LEN,
    SECURITY_NAME_MAX_LEN, SERVER_URL_MAX_LEN, SNI_MAX_LEN,
};
pub use error::Error;
pub use modules::{Feature, Module, ModuleParams};
pub use services::security::{
    CertificateCheck, PskProvisioning, SecurityProfileId, SecurityService,
};

// Re-export atat
pub use atat;

/// Prelude - Include traits
pub mod prelude {
    pub use crate::modules::ModuleParams;
    pub use atat::blocking::AtatClient;
}
