//! Error types for the `typy` driver.
//!
//! Scanning itself never fails; malformed input becomes UNKNOWN tokens.
//! This module covers what can go wrong around it:
//!
//! - Command-line usage
//! - Reading the source file
//! - Writing the token dump

pub mod errors;
