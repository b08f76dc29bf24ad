use super::ModuleParams;

/// Uses the legacy cipher suite enumeration, one suite at a time.
#[derive(Debug, Clone, Copy)]
pub struct SaraU201;

impl ModuleParams for SaraU201 {}
