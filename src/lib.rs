//! ELF relocation entries.
//!
//! This library decodes ELF relocation records and describes them per target
//! architecture. It is organized into several modules:
//! - `relocation`: the canonical relocation entry.
//! - `raw`: decoding of the four on-disk record layouts.
//! - `arch`: per-architecture relocation type tables.
//! - `symbol`: symbols a relocation may reference.
//! - `reader`: extraction of relocation sections from an ELF file.
//! - `config`: CLI configuration.

pub mod arch;
pub mod config;
pub mod error;
pub mod raw;
pub mod reader;
pub mod relocation;
pub mod symbol;

pub use arch::Arch;
pub use error::{Error, Result};
pub use relocation::Relocation;
pub use symbol::Symbol;
