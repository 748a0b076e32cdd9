//! Symbols referenced by relocations.
//!
//! Symbols are owned by the symbol table they were read from. Relocations
//! only borrow them, so a table must outlive every relocation bound to it.

use object::elf::SHN_UNDEF;

use crate::error::{not_supported, Result};

/// A symbol from an ELF symbol table (`.symtab` or `.dynsym`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Raw (possibly mangled) name.
    pub name: String,
    /// `st_value`.
    pub value: u64,
    /// `st_size`.
    pub size: u64,
    /// Binding (`STB_*`).
    pub bind: u8,
    /// Type (`STT_*`).
    pub kind: u8,
    /// Section header index (`st_shndx`), `SHN_UNDEF` for imports.
    pub section_index: u16,
}

impl Symbol {
    pub fn new(name: impl Into<String>, value: u64, size: u64) -> Self {
        Self {
            name: name.into(),
            value,
            size,
            bind: 0,
            kind: 0,
            section_index: SHN_UNDEF,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.section_index == SHN_UNDEF
    }

    /// The demangled name, for C++ and Rust symbols.
    ///
    /// Names that no demangler recognizes (plain C symbols, for instance)
    /// are reported as `NotSupported` so the caller can fall back to `name`.
    pub fn demangled_name(&self) -> Result<String> {
        let demangled = symbolic_demangle::demangle(&self.name);
        if demangled == self.name.as_str() {
            return Err(not_supported(format!(
                "no demangler recognizes '{}'",
                self.name
            )));
        }
        Ok(demangled.into_owned())
    }

    /// The name to show to a user: demangled when possible.
    pub fn display_name(&self) -> String {
        self.demangled_name().unwrap_or_else(|_| self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn new_symbol_is_undefined() {
        let sym = Symbol::new("puts", 0, 0);
        assert!(sym.is_undefined());
        assert_eq!(sym.name, "puts");
    }

    #[test]
    fn plain_c_name_is_not_demangled() {
        let sym = Symbol::new("puts", 0, 0);
        assert!(matches!(
            sym.demangled_name(),
            Err(Error::NotSupported { .. })
        ));
        assert_eq!(sym.display_name(), "puts");
    }

    #[test]
    fn cpp_name_is_demangled() {
        let sym = Symbol::new("_ZN3foo3barEv", 0x1000, 16);
        let demangled = sym.demangled_name().unwrap();
        assert!(demangled.starts_with("foo::bar"), "{demangled}");
        assert!(sym.display_name().starts_with("foo::bar"));
    }

    #[test]
    fn equality_is_by_content() {
        let a = Symbol::new("main", 0x1000, 32);
        let b = Symbol::new("main", 0x1000, 32);
        assert_eq!(a, b);
        assert_ne!(a, Symbol::new("main", 0x1010, 32));
    }
}
