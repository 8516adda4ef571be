//! Dirprep: Destination-Directory Preparation Utilities
//!
//! A library of filesystem-preparation helpers centered on a non-overwriting
//! directory merge, plus a structural-key memoization wrapper and small
//! process-wide utilities (id generation, line counting, content helpers).

pub mod convert;
pub mod error;
pub mod fs;
pub mod ident;
pub mod logging;
pub mod memo;
pub mod merge;
pub mod text;

pub use error::{ConfigError, FsError, MemoError};
pub use memo::{memoize, Memo};
pub use merge::merge;
