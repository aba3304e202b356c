//! Shared utilities used across the auth and domain modules.

pub mod clock;
pub mod fmt;
pub(crate) mod lifecycle;
pub mod serde_util;

pub use clock::{Clock, SystemClock};
