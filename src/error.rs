use crate::modules::Feature;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    // Local validation errors, detected before any exchange with the module
    /// A string argument (credential name, host name, URL, PSK or PSK
    /// identity) exceeds its field's maximum length
    NameTooLong,
    /// PSK and PSK identity are only accepted as a pair, and neither may be
    /// combined with root-of-trust generation
    InvalidPsk,
    /// Cipher suite identifier outside the legacy enumeration of this module
    InvalidCipherSuite,
    /// The cipher suite list of this profile cannot hold another entry
    CipherListFull,

    /// Operation requires a feature this module variant does not have
    Unsupported(Feature),

    /// The security profile handle does not refer to a live context
    InvalidContext,
    /// All security profile slots are in use
    NoFreeProfiles,

    Atat(atat::Error),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::NameTooLong => defmt::write!(f, "NameTooLong"),
            Self::InvalidPsk => defmt::write!(f, "InvalidPsk"),
            Self::InvalidCipherSuite => defmt::write!(f, "InvalidCipherSuite"),
            Self::CipherListFull => defmt::write!(f, "CipherListFull"),
            Self::Unsupported(feature) => defmt::write!(f, "Unsupported({:?})", feature),
            Self::InvalidContext => defmt::write!(f, "InvalidContext"),
            Self::NoFreeProfiles => defmt::write!(f, "NoFreeProfiles"),
            Self::Atat(e) => defmt::write!(f, "Atat({:?})", e),
            _ => defmt::write!(f, "non_exhaustive"),
        }
    }
}

impl From<atat::Error> for Error {
    fn from(e: atat::Error) -> Self {
        Self::Atat(e)
    }
}
