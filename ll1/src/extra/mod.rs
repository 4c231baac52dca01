#[cfg(feature = "logos_support")]
mod logos_support;
#[cfg(feature = "logos_support")]
pub use self::logos_support::{LogosTokens, TerminalName, ERROR_TERMINAL};
