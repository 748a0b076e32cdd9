//! x86_64 relocation types.

use object::elf::*;

use super::{Arch, RelocInfo, RelocTable};

pub struct X86_64;

impl RelocTable for X86_64 {
    fn arch(&self) -> Arch {
        Arch::X86_64
    }

    fn entries(&self) -> &'static [RelocInfo] {
        RELOCATIONS
    }
}

static RELOCATIONS: &[RelocInfo] = &[
    RelocInfo::new(R_X86_64_NONE, "NONE", 0),
    RelocInfo::new(R_X86_64_64, "64", 8),
    RelocInfo::new(R_X86_64_PC32, "PC32", 4),
    RelocInfo::new(R_X86_64_GOT32, "GOT32", 4),
    RelocInfo::new(R_X86_64_PLT32, "PLT32", 4),
    RelocInfo::new(R_X86_64_COPY, "COPY", 4),
    RelocInfo::new(R_X86_64_GLOB_DAT, "GLOB_DAT", 8),
    RelocInfo::new(R_X86_64_JUMP_SLOT, "JUMP_SLOT", 8),
    RelocInfo::new(R_X86_64_RELATIVE, "RELATIVE", 8),
    RelocInfo::new(R_X86_64_GOTPCREL, "GOTPCREL", 4),
    RelocInfo::new(R_X86_64_32, "32", 4),
    RelocInfo::new(R_X86_64_32S, "32S", 4),
    RelocInfo::new(R_X86_64_16, "16", 2),
    RelocInfo::new(R_X86_64_PC16, "PC16", 2),
    RelocInfo::new(R_X86_64_8, "8", 1),
    RelocInfo::new(R_X86_64_PC8, "PC8", 1),
    RelocInfo::new(R_X86_64_DTPMOD64, "DTPMOD64", 8),
    RelocInfo::new(R_X86_64_DTPOFF64, "DTPOFF64", 8),
    RelocInfo::new(R_X86_64_TPOFF64, "TPOFF64", 8),
    RelocInfo::new(R_X86_64_TLSGD, "TLSGD", 4),
    RelocInfo::new(R_X86_64_TLSLD, "TLSLD", 4),
    RelocInfo::new(R_X86_64_DTPOFF32, "DTPOFF32", 4),
    RelocInfo::new(R_X86_64_GOTTPOFF, "GOTTPOFF", 4),
    RelocInfo::new(R_X86_64_TPOFF32, "TPOFF32", 4),
    RelocInfo::new(R_X86_64_PC64, "PC64", 8),
    RelocInfo::new(R_X86_64_GOTOFF64, "GOTOFF64", 8),
    RelocInfo::new(R_X86_64_GOTPC32, "GOTPC32", 4),
    RelocInfo::new(R_X86_64_GOT64, "GOT64", 8),
    RelocInfo::new(R_X86_64_GOTPCREL64, "GOTPCREL64", 8),
    RelocInfo::new(R_X86_64_GOTPC64, "GOTPC64", 8),
    RelocInfo::new(R_X86_64_GOTPLT64, "GOTPLT64", 8),
    RelocInfo::new(R_X86_64_PLTOFF64, "PLTOFF64", 8),
    RelocInfo::new(R_X86_64_SIZE32, "SIZE32", 4),
    RelocInfo::new(R_X86_64_SIZE64, "SIZE64", 8),
    RelocInfo::new(R_X86_64_GOTPC32_TLSDESC, "GOTPC32_TLSDESC", 4),
    RelocInfo::new(R_X86_64_TLSDESC_CALL, "TLSDESC_CALL", 0),
    RelocInfo::new(R_X86_64_TLSDESC, "TLSDESC", 8),
    RelocInfo::new(R_X86_64_IRELATIVE, "IRELATIVE", 8),
    RelocInfo::new(R_X86_64_RELATIVE64, "RELATIVE64", 8),
    RelocInfo::new(R_X86_64_GOTPCRELX, "GOTPCRELX", 4),
    RelocInfo::new(R_X86_64_REX_GOTPCRELX, "REX_GOTPCRELX", 4),
];
