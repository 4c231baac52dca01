mod error;
mod limits;
mod ll1;
mod traits;

pub use crate::error::{AnalysisError, BuildError, ErrorKind, LoadError, ParseError};
pub use crate::limits::{Limits, TablePolicy};
pub use crate::ll1::*;
pub use crate::traits::TokenSource;
