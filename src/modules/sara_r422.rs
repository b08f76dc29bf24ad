use super::ModuleParams;

#[derive(Debug, Clone, Copy)]
pub struct SaraR422;

impl ModuleParams for SaraR422 {
    fn supports_iana_cipher_suites(&self) -> bool {
        true
    }
    fn supports_server_name_indication(&self) -> bool {
        true
    }
    fn supports_rot_psk(&self) -> bool {
        true
    }
}
