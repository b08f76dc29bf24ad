use super::ModuleParams;

/// Uses the legacy cipher suite enumeration, one suite at a time.
#[derive(Debug, Clone, Copy)]
pub struct TobyR2;

impl ModuleParams for TobyR2 {}
