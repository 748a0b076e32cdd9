//! Relocation entries.
//!
//! A [`Relocation`] is one record of a `SHT_REL` or `SHT_RELA` section in a
//! canonical form, independent of the ELF class it was read from. It only
//! classifies and describes the entry; it never applies it.

use std::fmt;

use object::endian::Endian;

use crate::arch::{self, Arch, RelocInfo};
use crate::error::{not_found, Result};
use crate::raw::RawRelocation;
use crate::symbol::Symbol;

/// A single relocation entry.
///
/// The architecture starts as [`Arch::None`]: only the owner of the entry
/// (the section reader) knows which machine the file targets and sets it
/// with [`Relocation::set_architecture`].
///
/// The symbol is borrowed from the symbol table that owns it. The entry
/// never extends its lifetime.
///
/// Equality and hashing cover the address, addend, type, architecture and
/// bound symbol (compared by content), followed by the layout flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relocation<'a> {
    address: u64,
    addend: i64,
    r_type: u32,
    arch: Arch,
    symbol: Option<&'a Symbol>,
    is_rela: bool,
}

impl<'a> Relocation<'a> {
    /// Builds an entry from explicit values, as if decoded from the
    /// matching record layout.
    pub fn new(address: u64, r_type: u32, addend: i64, is_rela: bool) -> Self {
        Self {
            address,
            addend,
            r_type,
            arch: Arch::None,
            symbol: None,
            is_rela,
        }
    }

    /// Decodes a raw on-disk record.
    pub fn from_raw<E: Endian, R: RawRelocation<E>>(raw: &R, endian: E) -> Self {
        raw.decode(endian)
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn set_address(&mut self, address: u64) {
        self.address = address;
    }

    /// Explicit addend for RELA entries, 0 for REL entries.
    pub fn addend(&self) -> i64 {
        self.addend
    }

    pub fn set_addend(&mut self, addend: i64) {
        self.addend = addend;
    }

    /// Raw architecture-defined type code.
    pub fn r_type(&self) -> u32 {
        self.r_type
    }

    pub fn set_type(&mut self, r_type: u32) {
        self.r_type = r_type;
    }

    pub fn is_rela(&self) -> bool {
        self.is_rela
    }

    pub fn is_rel(&self) -> bool {
        !self.is_rela
    }

    pub fn architecture(&self) -> Arch {
        self.arch
    }

    pub fn set_architecture(&mut self, arch: Arch) {
        self.arch = arch;
    }

    pub fn has_symbol(&self) -> bool {
        self.symbol.is_some()
    }

    /// The bound symbol, or `NotFound` if none was bound.
    pub fn symbol(&self) -> Result<&'a Symbol> {
        self.symbol
            .ok_or_else(|| not_found("no symbol associated with this relocation"))
    }

    /// Binds `symbol`, replacing any previous binding.
    pub fn bind(&mut self, symbol: &'a Symbol) {
        self.symbol = Some(symbol);
    }

    pub fn unbind(&mut self) {
        self.symbol = None;
    }

    /// Name and operand size of this entry's type.
    ///
    /// Fails with `NotImplemented` naming only the architecture when it has
    /// no relocation table, or naming both when the type is unknown to it.
    pub fn info(&self) -> Result<&'static RelocInfo> {
        arch::resolve(self.arch, self.r_type)
    }

    /// Number of bytes at `address` this relocation affects.
    pub fn size(&self) -> Result<u8> {
        self.info().map(|info| info.size)
    }

    pub fn type_name(&self) -> Result<&'static str> {
        self.info().map(|info| info.name)
    }
}

impl fmt::Display for Relocation<'_> {
    /// `address  type  symbol`, each column ten wide.
    ///
    /// Unknown architectures or types show the numeric code, and an unbound
    /// symbol leaves the last column empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r_type = match self.type_name() {
            Ok(name) => name.to_string(),
            Err(_) => self.r_type.to_string(),
        };
        let symbol = self.symbol.map(Symbol::display_name).unwrap_or_default();
        write!(f, "{:<10x}{:<10}{:<10}", self.address, r_type, symbol)
    }
}

#[cfg(test)]
mod tests;
