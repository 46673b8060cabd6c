pub mod codec;
pub mod error;
pub mod params;
pub mod shamir;

pub use crate::shamir::{Share, ShamirScheme};
