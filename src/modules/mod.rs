pub mod delivery;
pub mod motion;
pub mod pipeline;
pub mod provisioning;
