//! Domain layer for the Registrar subsystem.

pub mod brain_key;
pub mod errors;
pub mod registration;

pub use brain_key::*;
pub use errors::*;
pub use registration::*;
