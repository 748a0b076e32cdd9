use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use object::elf::Rela64;
use object::endian::{LittleEndian, I64, U64};

use super::*;
use crate::error::Error;

fn hash_of(reloc: &Relocation<'_>) -> u64 {
    let mut hasher = DefaultHasher::new();
    reloc.hash(&mut hasher);
    hasher.finish()
}

fn x86_64(address: u64, r_type: u32, addend: i64) -> Relocation<'static> {
    let mut reloc = Relocation::new(address, r_type, addend, true);
    reloc.set_architecture(Arch::X86_64);
    reloc
}

#[test]
fn relative_entry_on_x86_64() {
    let raw = Rela64 {
        r_offset: U64::new(LittleEndian, 0x1000),
        r_info: U64::new(LittleEndian, 0x0000_0001_0000_0008),
        r_addend: I64::new(LittleEndian, -8),
    };
    let mut reloc = Relocation::from_raw(&raw, LittleEndian);
    reloc.set_architecture(Arch::X86_64);

    assert_eq!(reloc.address(), 0x1000);
    assert_eq!(reloc.addend(), -8);
    assert!(reloc.is_rela());
    assert_eq!(reloc.size(), Ok(8));
    assert_eq!(reloc.type_name(), Ok("RELATIVE"));
}

#[test]
fn new_entry_has_no_architecture_or_symbol() {
    let reloc = Relocation::new(0x40, 2, 0, false);
    assert_eq!(reloc.architecture(), Arch::None);
    assert!(!reloc.has_symbol());
    assert!(matches!(reloc.symbol(), Err(Error::NotFound { .. })));
}

#[test]
fn bind_and_rebind() {
    let puts = Symbol::new("puts", 0, 0);
    let printf = Symbol::new("printf", 0, 0);

    let mut reloc = x86_64(0x3fd8, 7, 0);
    reloc.bind(&puts);
    assert!(reloc.has_symbol());
    assert_eq!(reloc.symbol().unwrap().name, "puts");

    reloc.bind(&printf);
    assert_eq!(reloc.symbol().unwrap().name, "printf");

    reloc.unbind();
    assert!(!reloc.has_symbol());
}

#[test]
fn setters() {
    let mut reloc = x86_64(0x1000, 8, 0);
    reloc.set_address(0x2000);
    reloc.set_addend(16);
    reloc.set_type(1);
    assert_eq!(reloc.address(), 0x2000);
    assert_eq!(reloc.addend(), 16);
    assert_eq!(reloc.r_type(), 1);
    assert_eq!(reloc.type_name(), Ok("64"));
}

#[test]
fn identical_fields_are_equal() {
    let sym_a = Symbol::new("main", 0x1130, 20);
    let sym_b = Symbol::new("main", 0x1130, 20);

    let mut a = x86_64(0x1000, 1, 4);
    let mut b = x86_64(0x1000, 1, 4);
    a.bind(&sym_a);
    b.bind(&sym_b);

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn changing_any_field_breaks_equality() {
    let sym = Symbol::new("main", 0x1130, 20);
    let other_sym = Symbol::new("exit", 0, 0);

    let mut base = x86_64(0x1000, 1, 4);
    base.bind(&sym);

    let mut changed = base.clone();
    changed.set_address(0x1008);
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.set_type(2);
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.set_addend(0);
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.set_architecture(Arch::I386);
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.bind(&other_sym);
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.unbind();
    assert_ne!(base, changed);

    let mut changed = Relocation::new(0x1000, 1, 4, false);
    changed.set_architecture(Arch::X86_64);
    changed.bind(&sym);
    assert_ne!(base, changed);
}

#[test]
fn deduplicates_in_hash_set() {
    let set: HashSet<_> = [x86_64(0x10, 8, 0), x86_64(0x10, 8, 0), x86_64(0x18, 8, 0)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn unknown_type_is_not_implemented() {
    let reloc = x86_64(0x1000, 250, 0);
    assert_eq!(
        reloc.size(),
        Err(Error::NotImplemented {
            arch: Arch::X86_64,
            r_type: Some(250),
        })
    );
    assert!(reloc.type_name().is_err());
}

#[test]
fn unsupported_arch_is_not_implemented() {
    let mut reloc = Relocation::new(0x1000, 3, 0, true);
    reloc.set_architecture(Arch::Riscv);
    assert_eq!(
        reloc.size(),
        Err(Error::NotImplemented {
            arch: Arch::Riscv,
            r_type: None,
        })
    );

    let unset = Relocation::new(0x1000, 3, 0, true);
    assert_eq!(
        unset.size(),
        Err(Error::NotImplemented {
            arch: Arch::None,
            r_type: None,
        })
    );
}

#[test]
fn display_without_symbol() {
    let reloc = x86_64(0x1000, 8, 0);
    assert_eq!(reloc.to_string(), format!("{:<10}{:<10}{:<10}", "1000", "RELATIVE", ""));
}

#[test]
fn display_falls_back_to_numeric_type() {
    let mut reloc = Relocation::new(0xabc, 3, 0, true);
    reloc.set_architecture(Arch::Mips);
    assert_eq!(reloc.to_string().split_whitespace().collect::<Vec<_>>(), ["abc", "3"]);

    let unknown = x86_64(0xabc, 250, 0);
    assert_eq!(unknown.to_string().split_whitespace().collect::<Vec<_>>(), ["abc", "250"]);
}

#[test]
fn display_prefers_demangled_symbol_name() {
    let plain = Symbol::new("puts", 0, 0);
    let mangled = Symbol::new("_ZN3foo3barEv", 0, 0);

    let mut reloc = x86_64(0x4018, 7, 0);
    reloc.bind(&plain);
    assert!(reloc.to_string().trim_end().ends_with("puts"));

    reloc.bind(&mangled);
    let line = reloc.to_string();
    assert!(line.contains("foo::bar"), "{line}");
    assert!(!line.contains("_ZN3foo"), "{line}");
}
