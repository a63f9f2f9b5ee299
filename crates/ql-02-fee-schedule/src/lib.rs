//! # Fee Schedule Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Maps an operation kind to its fee in the core asset. The table is an
//! explicit value (usually the `current_fees` snapshot of the chain's global
//! properties) threaded into every call; there is no process-wide fee state.
//!
//! ## Fee Formula
//!
//! ```text
//! base   = fee + ceil(payload_bytes * price_per_kbyte / 1024)
//! scaled = ceil(base * scale / 10000)
//! fee    = price.convert(scaled)            // rounds up
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Never under-charge | `domain/schedule.rs` - ceiling division at every step |
//! | Unknown kinds fail | `domain/schedule.rs` - `parameters_for()` |
//! | No overflow | `domain/schedule.rs` - `u128` intermediates |

pub mod domain;

pub use domain::*;
