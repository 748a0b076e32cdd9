//! On-disk relocation record layouts.
//!
//! ELF has four relocation record shapes: `Elf32_Rel`, `Elf32_Rela`,
//! `Elf64_Rel` and `Elf64_Rela`. The `object` crate already provides them as
//! plain-old-data structs; this module decodes each into a [`Relocation`].
//!
//! The type code is always the low part of `r_info`. How many bits that is
//! depends only on the record's word size (8 bits for ELF32, 32 for ELF64),
//! never on the target architecture.

use object::elf::{Rel32, Rel64, Rela32, Rela64};
use object::endian::Endian;

use crate::relocation::Relocation;

const ELF32_TYPE_MASK: u32 = 0xff;
const ELF64_TYPE_MASK: u64 = 0xffff_ffff;

/// A raw relocation record as stored in a `SHT_REL` or `SHT_RELA` section.
///
/// `endian` is the byte order the record is stored in; pass the host's
/// order for records that were already normalized.
pub trait RawRelocation<E: Endian> {
    /// Whether this layout carries an explicit `r_addend`.
    const IS_RELA: bool;

    fn decode(&self, endian: E) -> Relocation<'static>;

    /// The symbol table index packed in `r_info` (0 means no symbol).
    fn symbol_index(&self, endian: E) -> u32;
}

impl<E: Endian> RawRelocation<E> for Rel32<E> {
    const IS_RELA: bool = false;

    fn decode(&self, endian: E) -> Relocation<'static> {
        let r_type = self.r_info.get(endian) & ELF32_TYPE_MASK;
        Relocation::new(self.r_offset.get(endian).into(), r_type, 0, Self::IS_RELA)
    }

    fn symbol_index(&self, endian: E) -> u32 {
        self.r_info.get(endian) >> 8
    }
}

impl<E: Endian> RawRelocation<E> for Rela32<E> {
    const IS_RELA: bool = true;

    fn decode(&self, endian: E) -> Relocation<'static> {
        let r_type = self.r_info.get(endian) & ELF32_TYPE_MASK;
        Relocation::new(
            self.r_offset.get(endian).into(),
            r_type,
            self.r_addend.get(endian).into(),
            Self::IS_RELA,
        )
    }

    fn symbol_index(&self, endian: E) -> u32 {
        self.r_info.get(endian) >> 8
    }
}

impl<E: Endian> RawRelocation<E> for Rel64<E> {
    const IS_RELA: bool = false;

    fn decode(&self, endian: E) -> Relocation<'static> {
        let r_type = (self.r_info.get(endian) & ELF64_TYPE_MASK) as u32;
        Relocation::new(self.r_offset.get(endian), r_type, 0, Self::IS_RELA)
    }

    fn symbol_index(&self, endian: E) -> u32 {
        (self.r_info.get(endian) >> 32) as u32
    }
}

impl<E: Endian> RawRelocation<E> for Rela64<E> {
    const IS_RELA: bool = true;

    fn decode(&self, endian: E) -> Relocation<'static> {
        let r_type = (self.r_info.get(endian) & ELF64_TYPE_MASK) as u32;
        Relocation::new(
            self.r_offset.get(endian),
            r_type,
            self.r_addend.get(endian),
            Self::IS_RELA,
        )
    }

    fn symbol_index(&self, endian: E) -> u32 {
        (self.r_info.get(endian) >> 32) as u32
    }
}
