//! Cross-subsystem scenarios. Every flow runs through the real services
//! with in-memory ports.

#[cfg(test)]
mod support;

#[cfg(test)]
mod assembler;
#[cfg(test)]
mod messaging;
#[cfg(test)]
mod multisig;
#[cfg(test)]
mod registrar_flow;
#[cfg(test)]
mod transfer_flow;
