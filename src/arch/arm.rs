//! 32-bit ARM relocation types.

use object::elf::*;

use super::{Arch, RelocInfo, RelocTable};

/// Codes with two ELF names (13, 129) use the one current toolchains emit.
pub struct Arm;

impl RelocTable for Arm {
    fn arch(&self) -> Arch {
        Arch::Arm
    }

    fn entries(&self) -> &'static [RelocInfo] {
        RELOCATIONS
    }
}

static RELOCATIONS: &[RelocInfo] = &[
    RelocInfo::new(R_ARM_NONE, "NONE", 0),
    RelocInfo::new(R_ARM_PC24, "PC24", 4),
    RelocInfo::new(R_ARM_ABS32, "ABS32", 4),
    RelocInfo::new(R_ARM_REL32, "REL32", 4),
    RelocInfo::new(R_ARM_PC13, "PC13", 4),
    RelocInfo::new(R_ARM_ABS16, "ABS16", 2),
    RelocInfo::new(R_ARM_ABS12, "ABS12", 4),
    RelocInfo::new(R_ARM_THM_ABS5, "THM_ABS5", 2),
    RelocInfo::new(R_ARM_ABS8, "ABS8", 1),
    RelocInfo::new(R_ARM_SBREL32, "SBREL32", 4),
    RelocInfo::new(R_ARM_THM_PC22, "THM_PC22", 4),
    RelocInfo::new(R_ARM_THM_PC8, "THM_PC8", 2),
    RelocInfo::new(R_ARM_AMP_VCALL9, "AMP_VCALL9", 4),
    RelocInfo::new(R_ARM_TLS_DESC, "TLS_DESC", 4),
    RelocInfo::new(R_ARM_XPC25, "XPC25", 4),
    RelocInfo::new(R_ARM_THM_XPC22, "THM_XPC22", 4),
    RelocInfo::new(R_ARM_TLS_DTPMOD32, "TLS_DTPMOD32", 4),
    RelocInfo::new(R_ARM_TLS_DTPOFF32, "TLS_DTPOFF32", 4),
    RelocInfo::new(R_ARM_TLS_TPOFF32, "TLS_TPOFF32", 4),
    RelocInfo::new(R_ARM_COPY, "COPY", 4),
    RelocInfo::new(R_ARM_GLOB_DAT, "GLOB_DAT", 4),
    RelocInfo::new(R_ARM_JUMP_SLOT, "JUMP_SLOT", 4),
    RelocInfo::new(R_ARM_RELATIVE, "RELATIVE", 4),
    RelocInfo::new(R_ARM_GOTOFF, "GOTOFF", 4),
    RelocInfo::new(R_ARM_GOTPC, "GOTPC", 4),
    RelocInfo::new(R_ARM_GOT32, "GOT32", 4),
    RelocInfo::new(R_ARM_PLT32, "PLT32", 4),
    RelocInfo::new(R_ARM_CALL, "CALL", 4),
    RelocInfo::new(R_ARM_JUMP24, "JUMP24", 4),
    RelocInfo::new(R_ARM_THM_JUMP24, "THM_JUMP24", 4),
    RelocInfo::new(R_ARM_BASE_ABS, "BASE_ABS", 4),
    RelocInfo::new(R_ARM_ALU_PCREL_7_0, "ALU_PCREL_7_0", 4),
    RelocInfo::new(R_ARM_ALU_PCREL_15_8, "ALU_PCREL_15_8", 4),
    RelocInfo::new(R_ARM_ALU_PCREL_23_15, "ALU_PCREL_23_15", 4),
    RelocInfo::new(R_ARM_LDR_SBREL_11_0, "LDR_SBREL_11_0", 4),
    RelocInfo::new(R_ARM_ALU_SBREL_19_12, "ALU_SBREL_19_12", 4),
    RelocInfo::new(R_ARM_ALU_SBREL_27_20, "ALU_SBREL_27_20", 4),
    RelocInfo::new(R_ARM_TARGET1, "TARGET1", 4),
    RelocInfo::new(R_ARM_SBREL31, "SBREL31", 4),
    RelocInfo::new(R_ARM_V4BX, "V4BX", 4),
    RelocInfo::new(R_ARM_TARGET2, "TARGET2", 4),
    RelocInfo::new(R_ARM_PREL31, "PREL31", 4),
    RelocInfo::new(R_ARM_MOVW_ABS_NC, "MOVW_ABS_NC", 4),
    RelocInfo::new(R_ARM_MOVT_ABS, "MOVT_ABS", 4),
    RelocInfo::new(R_ARM_MOVW_PREL_NC, "MOVW_PREL_NC", 4),
    RelocInfo::new(R_ARM_MOVT_PREL, "MOVT_PREL", 4),
    RelocInfo::new(R_ARM_THM_MOVW_ABS_NC, "THM_MOVW_ABS_NC", 4),
    RelocInfo::new(R_ARM_THM_MOVT_ABS, "THM_MOVT_ABS", 4),
    RelocInfo::new(R_ARM_THM_MOVW_PREL_NC, "THM_MOVW_PREL_NC", 4),
    RelocInfo::new(R_ARM_THM_MOVT_PREL, "THM_MOVT_PREL", 4),
    RelocInfo::new(R_ARM_THM_JUMP19, "THM_JUMP19", 4),
    RelocInfo::new(R_ARM_THM_JUMP6, "THM_JUMP6", 2),
    RelocInfo::new(R_ARM_THM_ALU_PREL_11_0, "THM_ALU_PREL_11_0", 4),
    RelocInfo::new(R_ARM_THM_PC12, "THM_PC12", 4),
    RelocInfo::new(R_ARM_ABS32_NOI, "ABS32_NOI", 4),
    RelocInfo::new(R_ARM_REL32_NOI, "REL32_NOI", 4),
    RelocInfo::new(R_ARM_ALU_PC_G0_NC, "ALU_PC_G0_NC", 4),
    RelocInfo::new(R_ARM_ALU_PC_G0, "ALU_PC_G0", 4),
    RelocInfo::new(R_ARM_ALU_PC_G1_NC, "ALU_PC_G1_NC", 4),
    RelocInfo::new(R_ARM_ALU_PC_G1, "ALU_PC_G1", 4),
    RelocInfo::new(R_ARM_ALU_PC_G2, "ALU_PC_G2", 4),
    RelocInfo::new(R_ARM_LDR_PC_G1, "LDR_PC_G1", 4),
    RelocInfo::new(R_ARM_LDR_PC_G2, "LDR_PC_G2", 4),
    RelocInfo::new(R_ARM_LDRS_PC_G0, "LDRS_PC_G0", 4),
    RelocInfo::new(R_ARM_LDRS_PC_G1, "LDRS_PC_G1", 4),
    RelocInfo::new(R_ARM_LDRS_PC_G2, "LDRS_PC_G2", 4),
    RelocInfo::new(R_ARM_LDC_PC_G0, "LDC_PC_G0", 4),
    RelocInfo::new(R_ARM_LDC_PC_G1, "LDC_PC_G1", 4),
    RelocInfo::new(R_ARM_LDC_PC_G2, "LDC_PC_G2", 4),
    RelocInfo::new(R_ARM_ALU_SB_G0_NC, "ALU_SB_G0_NC", 4),
    RelocInfo::new(R_ARM_ALU_SB_G0, "ALU_SB_G0", 4),
    RelocInfo::new(R_ARM_ALU_SB_G1_NC, "ALU_SB_G1_NC", 4),
    RelocInfo::new(R_ARM_ALU_SB_G1, "ALU_SB_G1", 4),
    RelocInfo::new(R_ARM_ALU_SB_G2, "ALU_SB_G2", 4),
    RelocInfo::new(R_ARM_LDR_SB_G0, "LDR_SB_G0", 4),
    RelocInfo::new(R_ARM_LDR_SB_G1, "LDR_SB_G1", 4),
    RelocInfo::new(R_ARM_LDR_SB_G2, "LDR_SB_G2", 4),
    RelocInfo::new(R_ARM_LDRS_SB_G0, "LDRS_SB_G0", 4),
    RelocInfo::new(R_ARM_LDRS_SB_G1, "LDRS_SB_G1", 4),
    RelocInfo::new(R_ARM_LDRS_SB_G2, "LDRS_SB_G2", 4),
    RelocInfo::new(R_ARM_LDC_SB_G0, "LDC_SB_G0", 4),
    RelocInfo::new(R_ARM_LDC_SB_G1, "LDC_SB_G1", 4),
    RelocInfo::new(R_ARM_LDC_SB_G2, "LDC_SB_G2", 4),
    RelocInfo::new(R_ARM_MOVW_BREL_NC, "MOVW_BREL_NC", 4),
    RelocInfo::new(R_ARM_MOVT_BREL, "MOVT_BREL", 4),
    RelocInfo::new(R_ARM_MOVW_BREL, "MOVW_BREL", 4),
    RelocInfo::new(R_ARM_THM_MOVW_BREL_NC, "THM_MOVW_BREL_NC", 4),
    RelocInfo::new(R_ARM_THM_MOVT_BREL, "THM_MOVT_BREL", 4),
    RelocInfo::new(R_ARM_THM_MOVW_BREL, "THM_MOVW_BREL", 4),
    RelocInfo::new(R_ARM_TLS_GOTDESC, "TLS_GOTDESC", 4),
    RelocInfo::new(R_ARM_TLS_CALL, "TLS_CALL", 4),
    RelocInfo::new(R_ARM_TLS_DESCSEQ, "TLS_DESCSEQ", 4),
    RelocInfo::new(R_ARM_THM_TLS_CALL, "THM_TLS_CALL", 4),
    RelocInfo::new(R_ARM_PLT32_ABS, "PLT32_ABS", 4),
    RelocInfo::new(R_ARM_GOT_ABS, "GOT_ABS", 4),
    RelocInfo::new(R_ARM_GOT_PREL, "GOT_PREL", 4),
    RelocInfo::new(R_ARM_GOT_BREL12, "GOT_BREL12", 4),
    RelocInfo::new(R_ARM_GOTOFF12, "GOTOFF12", 4),
    RelocInfo::new(R_ARM_GOTRELAX, "GOTRELAX", 4),
    RelocInfo::new(R_ARM_GNU_VTENTRY, "GNU_VTENTRY", 0),
    RelocInfo::new(R_ARM_GNU_VTINHERIT, "GNU_VTINHERIT", 0),
    RelocInfo::new(R_ARM_THM_PC11, "THM_PC11", 2),
    RelocInfo::new(R_ARM_THM_PC9, "THM_PC9", 2),
    RelocInfo::new(R_ARM_TLS_GD32, "TLS_GD32", 4),
    RelocInfo::new(R_ARM_TLS_LDM32, "TLS_LDM32", 4),
    RelocInfo::new(R_ARM_TLS_LDO32, "TLS_LDO32", 4),
    RelocInfo::new(R_ARM_TLS_IE32, "TLS_IE32", 4),
    RelocInfo::new(R_ARM_TLS_LE32, "TLS_LE32", 4),
    RelocInfo::new(R_ARM_TLS_LDO12, "TLS_LDO12", 4),
    RelocInfo::new(R_ARM_TLS_LE12, "TLS_LE12", 4),
    RelocInfo::new(R_ARM_TLS_IE12GP, "TLS_IE12GP", 4),
    RelocInfo::new(R_ARM_THM_TLS_DESCSEQ16, "THM_TLS_DESCSEQ16", 2),
    RelocInfo::new(R_ARM_THM_TLS_DESCSEQ32, "THM_TLS_DESCSEQ32", 4),
    RelocInfo::new(R_ARM_THM_GOT_BREL12, "THM_GOT_BREL12", 4),
    RelocInfo::new(R_ARM_IRELATIVE, "IRELATIVE", 4),
];
