//! ### 26 - Device and data security
//!
//! SSL/TLS provides a secure connection between two entities using TCP or UDP
//! sockets for communication (i.e. HTTP/FTP server and HTTP/FTP client). The
//! security aspects used in the current connection depend on the SSL/TLS
//! configuration and features supported by the communicating entities:
//! - **Server authentication**: verification of the server certificate
//!   against a trusted certificate or a trusted certificates list;
//! - **Client authentication**: use of the client certificate and the
//!   corresponding private key;
//! - **Data security and integrity**: data encryption and Hash Message
//!   Authentication Code (HMAC) generation.
//!
//! `AT+USECPRF` manages the security profiles used for SSL/TLS/DTLS
//! connections. Each profile holds the certificate validation level, the
//! minimum SSL/TLS version, the cipher suite configuration, the credential
//! internal names (the credentials themselves are provisioned on the module's
//! file system), the expected server URL and host name, and the pre-shared
//! key configuration.
//!
//! **Notes:**
//! - To set all the parameters in a security profile, a set command for each
//!   `<op_code>` needs to be issued (e.g. certificate validation level,
//!   minimum SSL/TLS version, ...).
//! - To reset (set to factory-programmed value) all the parameters of a
//!   specific security profile, issue the `AT+USECPRF=<profile_id>` command
//!   (operation: `None`).
pub mod types;

use atat::atat_derive::AtatCmd;
use types::*;

use super::NoResponse;
use crate::services::security::SecurityProfileId;

/// 26.1.3 SSL/TLS security layer profile manager +USECPRF
#[derive(Clone, AtatCmd)]
#[at_cmd("+USECPRF", NoResponse)]
pub struct SecurityProfileManager {
    /// USECMNG security profile identifier, in range 0-4; if it is not
    /// followed by other parameters the profile settings will be reset (set
    /// to factory-programmed value)
    #[at_arg(position = 0, len = 1)]
    pub profile_id: SecurityProfileId,
    #[at_arg(position = 1)]
    pub operation: Option<SecurityProfileOperation>,
}
