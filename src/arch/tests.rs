use super::*;
use crate::error::Error;

#[test]
fn machine_round_trips() {
    for machine in [0, 3, 8, 20, 21, 22, 40, 43, 62, 183, 243, 258, 0x1234] {
        assert_eq!(Arch::from_machine(machine).machine(), machine);
    }
    assert_eq!(Arch::from_machine(62), Arch::X86_64);
    assert_eq!(Arch::from_machine(0x1234), Arch::Other(0x1234));
    assert_eq!(Arch::default(), Arch::None);
}

#[test]
fn display_names() {
    assert_eq!(Arch::X86_64.to_string(), "x86_64");
    assert_eq!(Arch::I386.to_string(), "i386");
    assert_eq!(Arch::Arm.to_string(), "ARM");
    assert_eq!(Arch::Aarch64.to_string(), "AARCH64");
    assert_eq!(Arch::None.to_string(), "NONE");
    assert_eq!(Arch::Other(0x1234).to_string(), "EM_4660");
}

#[test]
fn tables_are_sorted_and_unique() {
    for arch in supported_architectures() {
        let entries = table(arch).unwrap().entries();
        assert!(!entries.is_empty());
        for pair in entries.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "{arch}: {} listed before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }
}

#[test]
fn every_entry_resolves() {
    for arch in supported_architectures() {
        let table = table(arch).unwrap();
        assert_eq!(table.arch(), arch);
        for info in table.entries() {
            assert_eq!(table.size(info.code), Ok(info.size));
            assert_eq!(table.type_name(info.code), Ok(info.name));
            assert_eq!(resolve(arch, info.code), Ok(info));
        }
    }
}

#[test]
fn supported_set() {
    let supported: Vec<_> = supported_architectures().collect();
    assert_eq!(
        supported,
        [Arch::I386, Arch::X86_64, Arch::Arm, Arch::Aarch64]
    );
    assert!(Arch::Riscv.table().is_none());
    assert!(Arch::None.table().is_none());
}

#[test]
fn known_sizes() {
    assert_eq!(resolve(Arch::X86_64, 1).unwrap().name, "64");
    assert_eq!(resolve(Arch::X86_64, 2).unwrap().size, 4);
    assert_eq!(resolve(Arch::X86_64, 8).unwrap().size, 8);
    assert_eq!(resolve(Arch::X86_64, 14).unwrap().size, 1);
    assert_eq!(resolve(Arch::I386, 7).unwrap().name, "JMP_SLOT");
    assert_eq!(resolve(Arch::I386, 20).unwrap().size, 2);
    assert_eq!(resolve(Arch::Arm, 23).unwrap().name, "RELATIVE");
    assert_eq!(resolve(Arch::Arm, 8).unwrap().size, 1);
    assert_eq!(resolve(Arch::Aarch64, 1027).unwrap().name, "RELATIVE");
    assert_eq!(resolve(Arch::Aarch64, 257).unwrap().size, 8);
    assert_eq!(resolve(Arch::Aarch64, 283).unwrap().name, "CALL26");
}

#[test]
fn unknown_type_names_arch_and_type() {
    assert_eq!(
        resolve(Arch::X86_64, 250),
        Err(Error::NotImplemented {
            arch: Arch::X86_64,
            r_type: Some(250),
        })
    );
    assert_eq!(
        resolve(Arch::Aarch64, 2),
        Err(Error::NotImplemented {
            arch: Arch::Aarch64,
            r_type: Some(2),
        })
    );
}

#[test]
fn unsupported_arch_names_only_arch() {
    assert_eq!(
        resolve(Arch::Mips, 2),
        Err(Error::NotImplemented {
            arch: Arch::Mips,
            r_type: None,
        })
    );
    assert_eq!(
        resolve(Arch::None, 0),
        Err(Error::NotImplemented {
            arch: Arch::None,
            r_type: None,
        })
    );
}
