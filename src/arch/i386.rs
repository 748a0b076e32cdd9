//! i386 relocation types.

use object::elf::*;

use super::{Arch, RelocInfo, RelocTable};

pub struct I386;

impl RelocTable for I386 {
    fn arch(&self) -> Arch {
        Arch::I386
    }

    fn entries(&self) -> &'static [RelocInfo] {
        RELOCATIONS
    }
}

static RELOCATIONS: &[RelocInfo] = &[
    RelocInfo::new(R_386_NONE, "NONE", 0),
    RelocInfo::new(R_386_32, "32", 4),
    RelocInfo::new(R_386_PC32, "PC32", 4),
    RelocInfo::new(R_386_GOT32, "GOT32", 4),
    RelocInfo::new(R_386_PLT32, "PLT32", 4),
    RelocInfo::new(R_386_COPY, "COPY", 4),
    RelocInfo::new(R_386_GLOB_DAT, "GLOB_DAT", 4),
    RelocInfo::new(R_386_JMP_SLOT, "JMP_SLOT", 4),
    RelocInfo::new(R_386_RELATIVE, "RELATIVE", 4),
    RelocInfo::new(R_386_GOTOFF, "GOTOFF", 4),
    RelocInfo::new(R_386_GOTPC, "GOTPC", 4),
    RelocInfo::new(R_386_32PLT, "32PLT", 4),
    RelocInfo::new(R_386_TLS_TPOFF, "TLS_TPOFF", 4),
    RelocInfo::new(R_386_TLS_IE, "TLS_IE", 4),
    RelocInfo::new(R_386_TLS_GOTIE, "TLS_GOTIE", 4),
    RelocInfo::new(R_386_TLS_LE, "TLS_LE", 4),
    RelocInfo::new(R_386_TLS_GD, "TLS_GD", 4),
    RelocInfo::new(R_386_TLS_LDM, "TLS_LDM", 4),
    RelocInfo::new(R_386_16, "16", 2),
    RelocInfo::new(R_386_PC16, "PC16", 2),
    RelocInfo::new(R_386_8, "8", 1),
    RelocInfo::new(R_386_PC8, "PC8", 1),
    RelocInfo::new(R_386_TLS_GD_32, "TLS_GD_32", 4),
    RelocInfo::new(R_386_TLS_GD_PUSH, "TLS_GD_PUSH", 4),
    RelocInfo::new(R_386_TLS_GD_CALL, "TLS_GD_CALL", 4),
    RelocInfo::new(R_386_TLS_GD_POP, "TLS_GD_POP", 4),
    RelocInfo::new(R_386_TLS_LDM_32, "TLS_LDM_32", 4),
    RelocInfo::new(R_386_TLS_LDM_PUSH, "TLS_LDM_PUSH", 4),
    RelocInfo::new(R_386_TLS_LDM_CALL, "TLS_LDM_CALL", 4),
    RelocInfo::new(R_386_TLS_LDM_POP, "TLS_LDM_POP", 4),
    RelocInfo::new(R_386_TLS_LDO_32, "TLS_LDO_32", 4),
    RelocInfo::new(R_386_TLS_IE_32, "TLS_IE_32", 4),
    RelocInfo::new(R_386_TLS_LE_32, "TLS_LE_32", 4),
    RelocInfo::new(R_386_TLS_DTPMOD32, "TLS_DTPMOD32", 4),
    RelocInfo::new(R_386_TLS_DTPOFF32, "TLS_DTPOFF32", 4),
    RelocInfo::new(R_386_TLS_TPOFF32, "TLS_TPOFF32", 4),
    RelocInfo::new(R_386_SIZE32, "SIZE32", 4),
    RelocInfo::new(R_386_TLS_GOTDESC, "TLS_GOTDESC", 4),
    RelocInfo::new(R_386_TLS_DESC_CALL, "TLS_DESC_CALL", 0),
    RelocInfo::new(R_386_TLS_DESC, "TLS_DESC", 4),
    RelocInfo::new(R_386_IRELATIVE, "IRELATIVE", 4),
    RelocInfo::new(R_386_GOT32X, "GOT32X", 4),
];
