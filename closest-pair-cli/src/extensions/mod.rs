//! Contains extensions used by the command line interface.

pub mod generate;
pub mod import;
pub mod solve;
