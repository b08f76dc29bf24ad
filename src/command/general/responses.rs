//! Responses for General Commands
use atat::atat_derive::AtatResp;
use heapless::String;

/// 4.5 Model identification +CGMM
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModelId {
    #[at_arg(position = 0)]
    pub model: String<64>,
}
