//! Library error definitions.
//!
//! The encoders themselves are total functions and never fail; errors only
//! arise at the edges, when mapping external input onto the mnemonic table.

/// Errors returned by this library.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A textual instruction name did not match any RV32I base mnemonic.
    #[error("unknown RV32I mnemonic: {0:?}")]
    UnknownMnemonic(String),
}
