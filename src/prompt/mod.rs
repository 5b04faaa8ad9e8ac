// Declare submodules
mod classification;
mod common;

pub use classification::ad_update_prompt;
pub use common::*;
