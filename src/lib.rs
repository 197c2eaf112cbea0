//! Host-testable library interface for arenactl.
//!
//! The match core (`arena`) is pure logic over microsecond timestamps and
//! can be tested on the host - no embedded hardware required.
//!
//! Usage: `cargo test`
//!
//! Note: the firmware binary uses main.rs with #![no_std] and #![no_main]
//! behind the `embedded` feature; it consumes this library for everything
//! except GPIO, I²C, and scheduling.

#![cfg_attr(not(test), no_std)]

pub mod arena;
pub mod config;
pub mod error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
