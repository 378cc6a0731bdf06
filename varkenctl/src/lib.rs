//! Varken CLI Library
//!
//! Command definitions, handlers and output formatting for `varkenctl`.
//! Configuration loading itself lives in [`varken_core`].

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;
