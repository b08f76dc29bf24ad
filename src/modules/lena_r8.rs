use super::ModuleParams;

#[derive(Debug, Clone, Copy)]
pub struct LenaR8;

impl ModuleParams for LenaR8 {
    fn supports_iana_cipher_suites(&self) -> bool {
        true
    }
    fn supports_server_name_indication(&self) -> bool {
        true
    }
}
