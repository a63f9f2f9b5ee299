//! # Domain Layer - Fee Schedule Subsystem
//!
//! - `schedule`: FeeParameters, FeeSchedule, the Chargeable seam
//! - `errors`: FeeError enumeration

pub mod errors;
pub mod schedule;

pub use errors::*;
pub use schedule::*;
