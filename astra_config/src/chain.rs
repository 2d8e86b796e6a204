pub use self::{bech32::*, info::*, registry::*};

pub mod bech32;
pub mod info;
pub mod registry;
