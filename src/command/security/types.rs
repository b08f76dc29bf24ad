//! Argument and parameter types used by Device and data security Commands and Responses

use atat::atat_derive::AtatEnum;
use heapless::String;

/// Maximum length of a credential internal name (trusted root certificate,
/// client certificate or client private key), excluding any terminator.
pub const SECURITY_NAME_MAX_LEN: usize = 200;

/// Maximum length of the expected server URL checked by the URL-integrity
/// certificate validation levels.
pub const SERVER_URL_MAX_LEN: usize = 256;

/// Maximum length of the client private key password.
pub const KEY_PASSWORD_MAX_LEN: usize = 128;

/// Maximum length of a pre-shared key given as an ASCII string.
pub const PSK_MAX_LEN: usize = 64;

/// Maximum length of a pre-shared key identity given as an ASCII string.
pub const PSK_ID_MAX_LEN: usize = 128;

/// Maximum length of the SNI (Server Name Indication) host name.
pub const SNI_MAX_LEN: usize = 128;

/// Certificate validation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CertificateValidationLevel {
    /// * 0 (factory-programmed value): level 0 - No validation; the server
    ///   certificate will not be checked or verified. The server in this case
    ///   is not authenticated.
    NoValidation = 0,
    /// * 1: level 1 - Root certificate validation without URL integrity check.
    ///   The server certificate will be verified with a specific trusted
    ///   certificate or with each of the imported trusted root certificates.
    RootCertValidationWithoutIntegrity = 1,
    /// * 2: level 2 - Level 1 validation with an additional URL integrity
    ///   check.
    RootCertValidationWithIntegrity = 2,
    /// * 3: level 3 - Level 2 validation with an additional check of the
    ///   certificate validity date.
    RootCertValidationWithValidityDate = 3,
}

/// Minimum SSL/TLS version to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TlsVersion {
    /// * 0 (factory-programmed value): any; the server can use any of the
    ///   TLS versions for the connection
    Any = 0,
    /// * 1: TLSv1.0; connection allowed only to servers supporting TLSv1.0
    Tls1_0 = 1,
    /// * 2: TLSv1.1; connection allowed only to servers supporting TLSv1.1
    Tls1_1 = 2,
    /// * 3: TLSv1.2; connection allowed only to servers supporting TLSv1.2
    Tls1_2 = 3,
    /// * 4: TLSv1.3; connection allowed only to servers supporting TLSv1.3
    Tls1_3 = 4,
}

/// Cipher suite configuration.
///
/// Values 1..=15 are the module-specific legacy enumeration (the IANA
/// registry code is given in brackets); these modules hold a single cipher
/// suite at a time and value 0 restores the automatic negotiation. Modules
/// accepting IANA numbering instead take 99 (add) or 100 (remove) followed by
/// the two bytes of the IANA code as hex strings.
#[derive(Debug, Clone, PartialEq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CipherSuiteSetting {
    /// 0 (factory-programmed value): the cipher suite will be negotiated in
    /// the handshake process
    #[at_arg(value = 0)]
    Automatic,
    /// 1: (0x002f) TLS_RSA_WITH_AES_128_CBC_SHA
    #[at_arg(value = 1)]
    TlsRsaWithAes128CbcSha,
    /// 2: (0x003C) TLS_RSA_WITH_AES_128_CBC_SHA256
    #[at_arg(value = 2)]
    TlsRsaWithAes128CbcSha256,
    /// 3: (0x0035) TLS_RSA_WITH_AES_256_CBC_SHA
    #[at_arg(value = 3)]
    TlsRsaWithAes256CbcSha,
    /// 4: (0x003D) TLS_RSA_WITH_AES_256_CBC_SHA256
    #[at_arg(value = 4)]
    TlsRsaWithAes256CbcSha256,
    /// 5: (0x000a) TLS_RSA_WITH_3DES_EDE_CBC_SHA
    #[at_arg(value = 5)]
    TlsRsaWith3desEdeCbcSha,
    /// 6: (0x008c) TLS_PSK_WITH_AES_128_CBC_SHA
    #[at_arg(value = 6)]
    TlsPskWithAes128CbcSha,
    /// 7: (0x008d) TLS_PSK_WITH_AES_256_CBC_SHA
    #[at_arg(value = 7)]
    TlsPskWithAes256CbcSha,
    /// 8: (0x008b) TLS_PSK_WITH_3DES_EDE_CBC_SHA
    #[at_arg(value = 8)]
    TlsPskWith3desEdeCbcSha,
    /// 9: (0x0094) TLS_RSA_PSK_WITH_AES_128_CBC_SHA
    #[at_arg(value = 9)]
    TlsRsaPskWithAes128CbcSha,
    /// 10: (0x0095) TLS_RSA_PSK_WITH_AES_256_CBC_SHA
    #[at_arg(value = 10)]
    TlsRsaPskWithAes256CbcSha,
    /// 11: (0x0093) TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA
    #[at_arg(value = 11)]
    TlsRsaPskWith3desEdeCbcSha,
    /// 12: (0x00ae) TLS_PSK_WITH_AES_128_CBC_SHA256
    #[at_arg(value = 12)]
    TlsPskWithAes128CbcSha256,
    /// 13: (0x00af) TLS_PSK_WITH_AES_256_CBC_SHA384
    #[at_arg(value = 13)]
    TlsPskWithAes256CbcSha384,
    /// 14: (0x00b6) TLS_RSA_PSK_WITH_AES_128_CBC_SHA256
    #[at_arg(value = 14)]
    TlsRsaPskWithAes128CbcSha256,
    /// 15: (0x00b7) TLS_RSA_PSK_WITH_AES_256_CBC_SHA384
    #[at_arg(value = 15)]
    TlsRsaPskWithAes256CbcSha384,
    /// 99: add a cipher suite to the list using the IANA enumeration;
    /// the two arguments are the upper and lower byte of the IANA code,
    /// each as a two character hex string
    #[at_arg(value = 99)]
    IanaAdd(String<2>, String<2>),
    /// 100: remove a cipher suite previously added with the IANA enumeration
    #[at_arg(value = 100)]
    IanaRemove(String<2>, String<2>),
}

impl CipherSuiteSetting {
    /// The legacy enumeration entry for an IANA cipher suite code, for
    /// modules that do not accept IANA numbering directly. `None` for codes
    /// outside the legacy table.
    pub fn from_iana(cipher: u16) -> Option<Self> {
        Some(match cipher {
            0x002f => Self::TlsRsaWithAes128CbcSha,
            0x003c => Self::TlsRsaWithAes128CbcSha256,
            0x0035 => Self::TlsRsaWithAes256CbcSha,
            0x003d => Self::TlsRsaWithAes256CbcSha256,
            0x000a => Self::TlsRsaWith3desEdeCbcSha,
            0x008c => Self::TlsPskWithAes128CbcSha,
            0x008d => Self::TlsPskWithAes256CbcSha,
            0x008b => Self::TlsPskWith3desEdeCbcSha,
            0x0094 => Self::TlsRsaPskWithAes128CbcSha,
            0x0095 => Self::TlsRsaPskWithAes256CbcSha,
            0x0093 => Self::TlsRsaPskWith3desEdeCbcSha,
            0x00ae => Self::TlsPskWithAes128CbcSha256,
            0x00af => Self::TlsPskWithAes256CbcSha384,
            0x00b6 => Self::TlsRsaPskWithAes128CbcSha256,
            0x00b7 => Self::TlsRsaPskWithAes256CbcSha384,
            _ => return None,
        })
    }

    pub fn iana_add(cipher: u16) -> Self {
        let (upper, lower) = iana_hex(cipher);
        Self::IanaAdd(upper, lower)
    }

    pub fn iana_remove(cipher: u16) -> Self {
        let (upper, lower) = iana_hex(cipher);
        Self::IanaRemove(upper, lower)
    }
}

fn iana_hex(cipher: u16) -> (String<2>, String<2>) {
    fn hex_byte(b: u8) -> String<2> {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let mut s = String::new();
        s.push(HEX[usize::from(b >> 4)] as char).ok();
        s.push(HEX[usize::from(b & 0x0f)] as char).ok();
        s
    }
    (hex_byte((cipher >> 8) as u8), hex_byte(cipher as u8))
}

/// PSK and PSK identity generation by RoT (Root of Trust)
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotGeneratedPsk {
    /// 0 (factory-programmed value): OFF - the PSK and PSK key ID are NOT
    /// generated by RoT
    Disabled = 0,
    /// 1: ON - the PSK and PSK key ID are generated by RoT in the process of
    /// SSL/TLS connection negotiation
    Enabled = 1,
}

#[derive(Debug, Clone, PartialEq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecurityProfileOperation {
    /// - 0: certificate validation level
    #[at_arg(value = 0)]
    CertificateValidationLevel(CertificateValidationLevel),
    /// - 1: minimum SSL/TLS version to use
    #[at_arg(value = 1)]
    TlsVersion(TlsVersion),
    /// - 2: cipher suite to be used
    #[at_arg(value = 2)]
    CipherSuite(CipherSuiteSetting),
    /// - 3: trusted root certificate internal name; the maximum length is 200
    ///   characters. The factory-programmed value is an empty string.
    #[at_arg(value = 3)]
    TrustedRootCertificateInternalName(String<SECURITY_NAME_MAX_LEN>),
    /// - 4: expected server URL, checked when the certificate validation
    ///   level carries a URL integrity check; the maximum length is 256
    ///   characters. The factory-programmed value is an empty string.
    #[at_arg(value = 4)]
    ExpectedServerUrl(String<SERVER_URL_MAX_LEN>),
    /// - 5: client certificate internal name; the maximum length is 200
    ///   characters. The factory-programmed value is an empty string.
    #[at_arg(value = 5)]
    ClientCertificateInternalName(String<SECURITY_NAME_MAX_LEN>),
    /// - 6: client private key internal name; the maximum length is 200
    ///   characters. The factory-programmed value is an empty string.
    #[at_arg(value = 6)]
    ClientPrivateKeyInternalName(String<SECURITY_NAME_MAX_LEN>),
    /// - 7: client private key password, if the key is password protected;
    ///   the maximum length is 128 characters.
    #[at_arg(value = 7)]
    ClientPrivateKeyPassword(String<KEY_PASSWORD_MAX_LEN>),
    /// - 8: pre-shared key used for connection, as an ASCII string of at most
    ///   64 characters.
    #[at_arg(value = 8)]
    PresharedKey(String<PSK_MAX_LEN>),
    /// - 9: pre-shared key identity used for connection, as an ASCII string
    ///   of at most 128 characters.
    #[at_arg(value = 9)]
    PresharedKeyIdentity(String<PSK_ID_MAX_LEN>),
    /// - 10: SNI (Server Name Indication), the additional negotiation header
    ///   used in SSL/TLS connection negotiation; the maximum length is 128
    ///   characters.
    #[at_arg(value = 10)]
    ServerNameIndication(String<SNI_MAX_LEN>),
    /// - 11: PSK key and PSK key identity generated by RoT (Root of trust)
    #[at_arg(value = 11)]
    PskGeneratedByRot(RotGeneratedPsk),
}
