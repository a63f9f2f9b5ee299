//! # Quill Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks of the signing pipeline
//! └── src/integration/  # Cross-subsystem scenarios
//!     ├── support.rs        # In-memory chain, broadcaster, wallet, clock
//!     ├── transfer_flow.rs  # Memo transfer from build to broadcast
//!     ├── multisig.rs       # Weighted and delegated authorities
//!     ├── messaging.rs      # Encrypted custom messages
//!     ├── assembler.rs      # State machine misuse
//!     └── registrar_flow.rs # Brain keys and account creation
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ql-tests
//! cargo test -p ql-tests integration::multisig::
//! cargo bench -p ql-tests
//! ```

pub mod integration;
