use super::ModuleParams;

#[derive(Debug, Clone, Copy)]
pub struct LaraR6;

impl ModuleParams for LaraR6 {
    fn supports_iana_cipher_suites(&self) -> bool {
        true
    }
    fn supports_server_name_indication(&self) -> bool {
        true
    }
}
