//! Architecture abstraction.
//!
//! A relocation type code only means something together with the machine it
//! was emitted for. This module defines the [`Arch`] key (the ELF
//! `e_machine` field) and the [`RelocTable`] trait, implemented once per
//! supported architecture, which maps type codes to names and operand sizes.

use std::fmt;

use object::elf;

use crate::error::{not_implemented, Result};

pub mod aarch64;
pub mod arm;
pub mod i386;
pub mod x86_64;

/// Target instruction set architecture of a relocation.
///
/// `None` is the sentinel used until the owning file's machine is known.
/// Machines without a dedicated variant are kept as `Other(e_machine)`;
/// use [`Arch::from_machine`] rather than building `Other` by hand so a
/// given machine always maps to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arch {
    #[default]
    None,
    I386,
    X86_64,
    Arm,
    Aarch64,
    Mips,
    Ppc,
    Ppc64,
    S390,
    Sparcv9,
    Riscv,
    LoongArch,
    Other(u16),
}

impl Arch {
    pub fn from_machine(e_machine: u16) -> Self {
        match e_machine {
            elf::EM_NONE => Arch::None,
            elf::EM_386 => Arch::I386,
            elf::EM_X86_64 => Arch::X86_64,
            elf::EM_ARM => Arch::Arm,
            elf::EM_AARCH64 => Arch::Aarch64,
            elf::EM_MIPS => Arch::Mips,
            elf::EM_PPC => Arch::Ppc,
            elf::EM_PPC64 => Arch::Ppc64,
            elf::EM_S390 => Arch::S390,
            elf::EM_SPARCV9 => Arch::Sparcv9,
            elf::EM_RISCV => Arch::Riscv,
            elf::EM_LOONGARCH => Arch::LoongArch,
            other => Arch::Other(other),
        }
    }

    pub fn machine(self) -> u16 {
        match self {
            Arch::None => elf::EM_NONE,
            Arch::I386 => elf::EM_386,
            Arch::X86_64 => elf::EM_X86_64,
            Arch::Arm => elf::EM_ARM,
            Arch::Aarch64 => elf::EM_AARCH64,
            Arch::Mips => elf::EM_MIPS,
            Arch::Ppc => elf::EM_PPC,
            Arch::Ppc64 => elf::EM_PPC64,
            Arch::S390 => elf::EM_S390,
            Arch::Sparcv9 => elf::EM_SPARCV9,
            Arch::Riscv => elf::EM_RISCV,
            Arch::LoongArch => elf::EM_LOONGARCH,
            Arch::Other(machine) => machine,
        }
    }

    /// The relocation table for this architecture, if there is one.
    pub fn table(self) -> Option<&'static dyn RelocTable> {
        table(self)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Arch::None => "NONE",
            Arch::I386 => "i386",
            Arch::X86_64 => "x86_64",
            Arch::Arm => "ARM",
            Arch::Aarch64 => "AARCH64",
            Arch::Mips => "MIPS",
            Arch::Ppc => "PPC",
            Arch::Ppc64 => "PPC64",
            Arch::S390 => "S390",
            Arch::Sparcv9 => "SPARCV9",
            Arch::Riscv => "RISCV",
            Arch::LoongArch => "LOONGARCH",
            Arch::Other(machine) => return write!(f, "EM_{machine}"),
        };
        f.write_str(name)
    }
}

/// One known relocation type of an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocInfo {
    /// Raw `r_type` value.
    pub code: u32,
    /// ELF constant name without the `R_<ARCH>_` prefix.
    pub name: &'static str,
    /// Number of bytes at the relocated address the entry affects.
    pub size: u8,
}

impl RelocInfo {
    pub const fn new(code: u32, name: &'static str, size: u8) -> Self {
        Self { code, name, size }
    }
}

/// Relocation type knowledge for a single architecture.
///
/// Implementations only provide their table; lookups are shared. Entries
/// must be sorted by `code` with no duplicates.
pub trait RelocTable: Sync {
    /// The architecture this table describes.
    fn arch(&self) -> Arch;

    /// All known relocation types, sorted by code.
    fn entries(&self) -> &'static [RelocInfo];

    fn lookup(&self, r_type: u32) -> Option<&'static RelocInfo> {
        let entries = self.entries();
        entries
            .binary_search_by_key(&r_type, |info| info.code)
            .ok()
            .map(|index| &entries[index])
    }

    /// Resolves both name and size, or fails naming the architecture and type.
    fn info(&self, r_type: u32) -> Result<&'static RelocInfo> {
        self.lookup(r_type)
            .ok_or_else(|| not_implemented(self.arch(), Some(r_type)))
    }

    fn type_name(&self, r_type: u32) -> Result<&'static str> {
        self.info(r_type).map(|info| info.name)
    }

    fn size(&self, r_type: u32) -> Result<u8> {
        self.info(r_type).map(|info| info.size)
    }
}

static TABLES: [&dyn RelocTable; 4] = [
    &i386::I386,
    &x86_64::X86_64,
    &arm::Arm,
    &aarch64::Aarch64,
];

/// Selects the relocation table for `arch`.
pub fn table(arch: Arch) -> Option<&'static dyn RelocTable> {
    TABLES.iter().copied().find(|table| table.arch() == arch)
}

/// Architectures that have a relocation table.
pub fn supported_architectures() -> impl Iterator<Item = Arch> {
    TABLES.iter().map(|table| table.arch())
}

/// Resolves `r_type` on `arch`, failing with the architecture alone when it
/// has no table.
pub fn resolve(arch: Arch, r_type: u32) -> Result<&'static RelocInfo> {
    table(arch)
        .ok_or_else(|| not_implemented(arch, None))?
        .info(r_type)
}

#[cfg(test)]
mod tests;
