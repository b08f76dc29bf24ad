//! AT Commands for u-blox cellular module family\
//! Following the [u-blox cellular modules AT commands manual](https://www.u-blox.com/sites/default/files/u-blox-CEL_ATCommands_%28UBX-13002752%29.pdf)

pub mod general;
pub mod security;

use atat::atat_derive::AtatResp;

#[derive(Clone, AtatResp)]
pub struct NoResponse;
