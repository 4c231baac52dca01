pub mod extra;

pub use ll1_core::*;
