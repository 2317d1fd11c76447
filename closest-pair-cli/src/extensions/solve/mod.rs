//! Contains functionality to write solver results.

mod formats;
pub use self::formats::*;
