use thiserror::Error;

/// Errors produced while decoding network input.
///
/// Both variants are fatal for a run and are raised before any output
/// file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetError {
    /// The netmask is malformed or an octet is not a valid
    /// leading-bits value.
    #[error("invalid netmask '{mask}': {detail}")]
    InvalidMask { mask: String, detail: String },

    /// A dotted-quad address could not be decoded.
    #[error("invalid address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },
}
