//! Delimiter scanner.
//!
//! This module contains the same-line lookahead, the per-kind pending
//! slots, and the single-pass scan itself.

pub(crate) mod lookahead;
mod pending;
mod scan;

pub use scan::{FlagScanner, ScanResult, parse};
