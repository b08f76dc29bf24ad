use super::ModuleParams;

#[derive(Debug, Clone, Copy)]
pub struct SaraR410m;

impl ModuleParams for SaraR410m {
    fn supports_iana_cipher_suites(&self) -> bool {
        true
    }
    fn supports_rot_psk(&self) -> bool {
        true
    }
}
