pub mod error;
pub mod loan_math;
pub mod types;

#[cfg(feature = "scoring")]
pub mod scoring;

#[cfg(feature = "history")]
pub mod history;

#[cfg(feature = "lending")]
pub mod lending;

#[cfg(feature = "gamification")]
pub mod gamification;

#[cfg(feature = "literacy")]
pub mod literacy;

#[cfg(feature = "session")]
pub mod session;

pub use error::CreditWiseError;
pub use types::*;

/// Standard result type for all creditwise operations
pub type CreditWiseResult<T> = Result<T, CreditWiseError>;
