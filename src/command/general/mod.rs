//! ### 4 - General
pub mod responses;

use atat::atat_derive::AtatCmd;
use responses::*;

/// 4.5 Model identification +CGMM
///
/// Text string identifying the module product name, e.g. "SARA-R510M8S".
/// Used to select the matching module parameters at run time.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGMM", ModelId)]
pub struct GetModelId;
