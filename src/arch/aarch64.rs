//! AArch64 relocation types.

use object::elf::*;

use super::{Arch, RelocInfo, RelocTable};

/// Includes the ILP32 (`P32_`) codes, which share the machine number.
pub struct Aarch64;

impl RelocTable for Aarch64 {
    fn arch(&self) -> Arch {
        Arch::Aarch64
    }

    fn entries(&self) -> &'static [RelocInfo] {
        RELOCATIONS
    }
}

static RELOCATIONS: &[RelocInfo] = &[
    RelocInfo::new(R_AARCH64_NONE, "NONE", 0),
    RelocInfo::new(R_AARCH64_P32_ABS32, "P32_ABS32", 4),
    RelocInfo::new(R_AARCH64_P32_COPY, "P32_COPY", 4),
    RelocInfo::new(R_AARCH64_P32_GLOB_DAT, "P32_GLOB_DAT", 4),
    RelocInfo::new(R_AARCH64_P32_JUMP_SLOT, "P32_JUMP_SLOT", 4),
    RelocInfo::new(R_AARCH64_P32_RELATIVE, "P32_RELATIVE", 4),
    RelocInfo::new(R_AARCH64_P32_TLS_DTPMOD, "P32_TLS_DTPMOD", 4),
    RelocInfo::new(R_AARCH64_P32_TLS_DTPREL, "P32_TLS_DTPREL", 4),
    RelocInfo::new(R_AARCH64_P32_TLS_TPREL, "P32_TLS_TPREL", 4),
    RelocInfo::new(R_AARCH64_P32_TLSDESC, "P32_TLSDESC", 4),
    RelocInfo::new(R_AARCH64_P32_IRELATIVE, "P32_IRELATIVE", 4),
    RelocInfo::new(R_AARCH64_ABS64, "ABS64", 8),
    RelocInfo::new(R_AARCH64_ABS32, "ABS32", 4),
    RelocInfo::new(R_AARCH64_ABS16, "ABS16", 2),
    RelocInfo::new(R_AARCH64_PREL64, "PREL64", 8),
    RelocInfo::new(R_AARCH64_PREL32, "PREL32", 4),
    RelocInfo::new(R_AARCH64_PREL16, "PREL16", 2),
    RelocInfo::new(R_AARCH64_MOVW_UABS_G0, "MOVW_UABS_G0", 4),
    RelocInfo::new(R_AARCH64_MOVW_UABS_G0_NC, "MOVW_UABS_G0_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_UABS_G1, "MOVW_UABS_G1", 4),
    RelocInfo::new(R_AARCH64_MOVW_UABS_G1_NC, "MOVW_UABS_G1_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_UABS_G2, "MOVW_UABS_G2", 4),
    RelocInfo::new(R_AARCH64_MOVW_UABS_G2_NC, "MOVW_UABS_G2_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_UABS_G3, "MOVW_UABS_G3", 4),
    RelocInfo::new(R_AARCH64_MOVW_SABS_G0, "MOVW_SABS_G0", 4),
    RelocInfo::new(R_AARCH64_MOVW_SABS_G1, "MOVW_SABS_G1", 4),
    RelocInfo::new(R_AARCH64_MOVW_SABS_G2, "MOVW_SABS_G2", 4),
    RelocInfo::new(R_AARCH64_LD_PREL_LO19, "LD_PREL_LO19", 4),
    RelocInfo::new(R_AARCH64_ADR_PREL_LO21, "ADR_PREL_LO21", 4),
    RelocInfo::new(R_AARCH64_ADR_PREL_PG_HI21, "ADR_PREL_PG_HI21", 4),
    RelocInfo::new(R_AARCH64_ADR_PREL_PG_HI21_NC, "ADR_PREL_PG_HI21_NC", 4),
    RelocInfo::new(R_AARCH64_ADD_ABS_LO12_NC, "ADD_ABS_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_LDST8_ABS_LO12_NC, "LDST8_ABS_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TSTBR14, "TSTBR14", 4),
    RelocInfo::new(R_AARCH64_CONDBR19, "CONDBR19", 4),
    RelocInfo::new(R_AARCH64_JUMP26, "JUMP26", 4),
    RelocInfo::new(R_AARCH64_CALL26, "CALL26", 4),
    RelocInfo::new(R_AARCH64_LDST16_ABS_LO12_NC, "LDST16_ABS_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_LDST32_ABS_LO12_NC, "LDST32_ABS_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_LDST64_ABS_LO12_NC, "LDST64_ABS_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_PREL_G0, "MOVW_PREL_G0", 4),
    RelocInfo::new(R_AARCH64_MOVW_PREL_G0_NC, "MOVW_PREL_G0_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_PREL_G1, "MOVW_PREL_G1", 4),
    RelocInfo::new(R_AARCH64_MOVW_PREL_G1_NC, "MOVW_PREL_G1_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_PREL_G2, "MOVW_PREL_G2", 4),
    RelocInfo::new(R_AARCH64_MOVW_PREL_G2_NC, "MOVW_PREL_G2_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_PREL_G3, "MOVW_PREL_G3", 4),
    RelocInfo::new(R_AARCH64_LDST128_ABS_LO12_NC, "LDST128_ABS_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_GOTOFF_G0, "MOVW_GOTOFF_G0", 4),
    RelocInfo::new(R_AARCH64_MOVW_GOTOFF_G0_NC, "MOVW_GOTOFF_G0_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_GOTOFF_G1, "MOVW_GOTOFF_G1", 4),
    RelocInfo::new(R_AARCH64_MOVW_GOTOFF_G1_NC, "MOVW_GOTOFF_G1_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_GOTOFF_G2, "MOVW_GOTOFF_G2", 4),
    RelocInfo::new(R_AARCH64_MOVW_GOTOFF_G2_NC, "MOVW_GOTOFF_G2_NC", 4),
    RelocInfo::new(R_AARCH64_MOVW_GOTOFF_G3, "MOVW_GOTOFF_G3", 4),
    RelocInfo::new(R_AARCH64_GOTREL64, "GOTREL64", 8),
    RelocInfo::new(R_AARCH64_GOTREL32, "GOTREL32", 4),
    RelocInfo::new(R_AARCH64_GOT_LD_PREL19, "GOT_LD_PREL19", 4),
    RelocInfo::new(R_AARCH64_LD64_GOTOFF_LO15, "LD64_GOTOFF_LO15", 4),
    RelocInfo::new(R_AARCH64_ADR_GOT_PAGE, "ADR_GOT_PAGE", 4),
    RelocInfo::new(R_AARCH64_LD64_GOT_LO12_NC, "LD64_GOT_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_LD64_GOTPAGE_LO15, "LD64_GOTPAGE_LO15", 4),
    RelocInfo::new(R_AARCH64_TLSGD_ADR_PREL21, "TLSGD_ADR_PREL21", 4),
    RelocInfo::new(R_AARCH64_TLSGD_ADR_PAGE21, "TLSGD_ADR_PAGE21", 4),
    RelocInfo::new(R_AARCH64_TLSGD_ADD_LO12_NC, "TLSGD_ADD_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSGD_MOVW_G1, "TLSGD_MOVW_G1", 4),
    RelocInfo::new(R_AARCH64_TLSGD_MOVW_G0_NC, "TLSGD_MOVW_G0_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_ADR_PREL21, "TLSLD_ADR_PREL21", 4),
    RelocInfo::new(R_AARCH64_TLSLD_ADR_PAGE21, "TLSLD_ADR_PAGE21", 4),
    RelocInfo::new(R_AARCH64_TLSLD_ADD_LO12_NC, "TLSLD_ADD_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_MOVW_G1, "TLSLD_MOVW_G1", 4),
    RelocInfo::new(R_AARCH64_TLSLD_MOVW_G0_NC, "TLSLD_MOVW_G0_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LD_PREL19, "TLSLD_LD_PREL19", 4),
    RelocInfo::new(R_AARCH64_TLSLD_MOVW_DTPREL_G2, "TLSLD_MOVW_DTPREL_G2", 4),
    RelocInfo::new(R_AARCH64_TLSLD_MOVW_DTPREL_G1, "TLSLD_MOVW_DTPREL_G1", 4),
    RelocInfo::new(R_AARCH64_TLSLD_MOVW_DTPREL_G1_NC, "TLSLD_MOVW_DTPREL_G1_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_MOVW_DTPREL_G0, "TLSLD_MOVW_DTPREL_G0", 4),
    RelocInfo::new(R_AARCH64_TLSLD_MOVW_DTPREL_G0_NC, "TLSLD_MOVW_DTPREL_G0_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_ADD_DTPREL_HI12, "TLSLD_ADD_DTPREL_HI12", 4),
    RelocInfo::new(R_AARCH64_TLSLD_ADD_DTPREL_LO12, "TLSLD_ADD_DTPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLD_ADD_DTPREL_LO12_NC, "TLSLD_ADD_DTPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST8_DTPREL_LO12, "TLSLD_LDST8_DTPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST8_DTPREL_LO12_NC, "TLSLD_LDST8_DTPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST16_DTPREL_LO12, "TLSLD_LDST16_DTPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST16_DTPREL_LO12_NC, "TLSLD_LDST16_DTPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST32_DTPREL_LO12, "TLSLD_LDST32_DTPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST32_DTPREL_LO12_NC, "TLSLD_LDST32_DTPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST64_DTPREL_LO12, "TLSLD_LDST64_DTPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST64_DTPREL_LO12_NC, "TLSLD_LDST64_DTPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSIE_MOVW_GOTTPREL_G1, "TLSIE_MOVW_GOTTPREL_G1", 4),
    RelocInfo::new(R_AARCH64_TLSIE_MOVW_GOTTPREL_G0_NC, "TLSIE_MOVW_GOTTPREL_G0_NC", 4),
    RelocInfo::new(R_AARCH64_TLSIE_ADR_GOTTPREL_PAGE21, "TLSIE_ADR_GOTTPREL_PAGE21", 4),
    RelocInfo::new(R_AARCH64_TLSIE_LD64_GOTTPREL_LO12_NC, "TLSIE_LD64_GOTTPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSIE_LD_GOTTPREL_PREL19, "TLSIE_LD_GOTTPREL_PREL19", 4),
    RelocInfo::new(R_AARCH64_TLSLE_MOVW_TPREL_G2, "TLSLE_MOVW_TPREL_G2", 4),
    RelocInfo::new(R_AARCH64_TLSLE_MOVW_TPREL_G1, "TLSLE_MOVW_TPREL_G1", 4),
    RelocInfo::new(R_AARCH64_TLSLE_MOVW_TPREL_G1_NC, "TLSLE_MOVW_TPREL_G1_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLE_MOVW_TPREL_G0, "TLSLE_MOVW_TPREL_G0", 4),
    RelocInfo::new(R_AARCH64_TLSLE_MOVW_TPREL_G0_NC, "TLSLE_MOVW_TPREL_G0_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLE_ADD_TPREL_HI12, "TLSLE_ADD_TPREL_HI12", 4),
    RelocInfo::new(R_AARCH64_TLSLE_ADD_TPREL_LO12, "TLSLE_ADD_TPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLE_ADD_TPREL_LO12_NC, "TLSLE_ADD_TPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST8_TPREL_LO12, "TLSLE_LDST8_TPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST8_TPREL_LO12_NC, "TLSLE_LDST8_TPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST16_TPREL_LO12, "TLSLE_LDST16_TPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST16_TPREL_LO12_NC, "TLSLE_LDST16_TPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST32_TPREL_LO12, "TLSLE_LDST32_TPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST32_TPREL_LO12_NC, "TLSLE_LDST32_TPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST64_TPREL_LO12, "TLSLE_LDST64_TPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST64_TPREL_LO12_NC, "TLSLE_LDST64_TPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_LD_PREL19, "TLSDESC_LD_PREL19", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_ADR_PREL21, "TLSDESC_ADR_PREL21", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_ADR_PAGE21, "TLSDESC_ADR_PAGE21", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_LD64_LO12, "TLSDESC_LD64_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_ADD_LO12, "TLSDESC_ADD_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_OFF_G1, "TLSDESC_OFF_G1", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_OFF_G0_NC, "TLSDESC_OFF_G0_NC", 4),
    RelocInfo::new(R_AARCH64_TLSDESC_LDR, "TLSDESC_LDR", 0),
    RelocInfo::new(R_AARCH64_TLSDESC_ADD, "TLSDESC_ADD", 0),
    RelocInfo::new(R_AARCH64_TLSDESC_CALL, "TLSDESC_CALL", 0),
    RelocInfo::new(R_AARCH64_TLSLE_LDST128_TPREL_LO12, "TLSLE_LDST128_TPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLE_LDST128_TPREL_LO12_NC, "TLSLE_LDST128_TPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST128_DTPREL_LO12, "TLSLD_LDST128_DTPREL_LO12", 4),
    RelocInfo::new(R_AARCH64_TLSLD_LDST128_DTPREL_LO12_NC, "TLSLD_LDST128_DTPREL_LO12_NC", 4),
    RelocInfo::new(R_AARCH64_COPY, "COPY", 8),
    RelocInfo::new(R_AARCH64_GLOB_DAT, "GLOB_DAT", 8),
    RelocInfo::new(R_AARCH64_JUMP_SLOT, "JUMP_SLOT", 8),
    RelocInfo::new(R_AARCH64_RELATIVE, "RELATIVE", 8),
    RelocInfo::new(R_AARCH64_TLS_DTPMOD, "TLS_DTPMOD", 8),
    RelocInfo::new(R_AARCH64_TLS_DTPREL, "TLS_DTPREL", 8),
    RelocInfo::new(R_AARCH64_TLS_TPREL, "TLS_TPREL", 8),
    RelocInfo::new(R_AARCH64_TLSDESC, "TLSDESC", 8),
    RelocInfo::new(R_AARCH64_IRELATIVE, "IRELATIVE", 8),
];
