//! # Shared Types Crate
//!
//! Chain value types shared by every Quill subsystem.
//!
//! ## Design Principles
//!
//! - **Value semantics**: every type here is immutable once built and
//!   compares by value.
//! - **Checked arithmetic**: amounts never wrap and never go negative.
//! - **No wire format**: serde derives exist so an external serializer can
//!   encode these canonically; this crate owns no encoding of its own.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
