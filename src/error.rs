//! Error types.
//!
//! The relocation core reports failures through [`Error`] so callers can
//! tell a missing symbol apart from an unsupported architecture or type.
//! The reader and the binary wrap these in `anyhow` like any other error.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::arch::Arch;

/// Result alias used by the relocation core.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was requested that was never attached.
    ///
    /// Raised when reading the symbol of a relocation that has no binding.
    NotFound {
        msg: Cow<'static, str>,
    },

    /// No relocation table knows how to describe the entry.
    ///
    /// `r_type` is `None` when the architecture itself has no table, and
    /// `Some` when the architecture is known but the code is not.
    NotImplemented {
        arch: Arch,
        r_type: Option<u32>,
    },

    /// The operation does not apply to this value (e.g. demangling a plain
    /// C symbol).
    NotSupported {
        msg: Cow<'static, str>,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { msg } => write!(f, "Not found: {msg}"),
            Error::NotImplemented { arch, r_type: None } => {
                write!(f, "Not implemented: {arch}")
            }
            Error::NotImplemented {
                arch,
                r_type: Some(r_type),
            } => write!(f, "Not implemented: {arch} - {r_type}"),
            Error::NotSupported { msg } => write!(f, "Not supported: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

#[cold]
#[inline(never)]
pub(crate) fn not_found(msg: impl Into<Cow<'static, str>>) -> Error {
    Error::NotFound { msg: msg.into() }
}

#[cold]
#[inline(never)]
pub(crate) fn not_implemented(arch: Arch, r_type: Option<u32>) -> Error {
    Error::NotImplemented { arch, r_type }
}

#[cold]
#[inline(never)]
pub(crate) fn not_supported(msg: impl Into<Cow<'static, str>>) -> Error {
    Error::NotSupported { msg: msg.into() }
}
