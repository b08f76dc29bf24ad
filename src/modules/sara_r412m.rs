use super::ModuleParams;

#[derive(Debug, Clone, Copy)]
pub struct SaraR412m;

impl ModuleParams for SaraR412m {
    fn supports_iana_cipher_suites(&self) -> bool {
        true
    }
    fn supports_rot_psk(&self) -> bool {
        true
    }
}
