use elfrel::reader::ElfRelocations;
use elfrel::Arch;
use object::write::{Object, Relocation, Symbol, SymbolSection};
use object::{
    Architecture, BinaryFormat, Endianness, RelocationEncoding, RelocationFlags, RelocationKind,
    SectionKind, SymbolFlags, SymbolKind, SymbolScope,
};

/// Builds a relocatable object with one call to an undefined `puts`.
fn object_calling_puts(arch: Architecture, kind: RelocationKind) -> Vec<u8> {
    let mut obj = Object::new(BinaryFormat::Elf, arch, Endianness::Little);
    let text = obj.add_section(Vec::new(), b".text".to_vec(), SectionKind::Text);
    obj.append_section_data(text, &[0x90; 16], 16);

    let puts = obj.add_symbol(Symbol {
        name: b"puts".to_vec(),
        value: 0,
        size: 0,
        kind: SymbolKind::Text,
        scope: SymbolScope::Dynamic,
        weak: false,
        section: SymbolSection::Undefined,
        flags: SymbolFlags::None,
    });
    obj.add_relocation(
        text,
        Relocation {
            offset: 4,
            symbol: puts,
            addend: -4,
            flags: RelocationFlags::Generic {
                kind,
                encoding: RelocationEncoding::Generic,
                size: 32,
            },
        },
    )
    .unwrap();
    obj.write().unwrap()
}

#[test]
fn reads_x86_64_rela_text() {
    let data = object_calling_puts(Architecture::X86_64, RelocationKind::PltRelative);
    let relocations = ElfRelocations::parse(&data).unwrap();
    assert_eq!(relocations.arch(), Arch::X86_64);
    assert!(relocations.is_64());

    let section = relocations
        .sections()
        .iter()
        .find(|section| section.name == ".rela.text")
        .expect("missing .rela.text");
    assert!(section.is_rela);
    assert_eq!(section.len(), 1);

    let entries: Vec<_> = relocations.relocations(section).collect();
    let reloc = &entries[0];
    assert_eq!(reloc.address(), 4);
    assert_eq!(reloc.addend(), -4);
    assert!(reloc.is_rela());
    assert_eq!(reloc.architecture(), Arch::X86_64);
    assert_eq!(reloc.type_name(), Ok("PLT32"));
    assert_eq!(reloc.size(), Ok(4));
    assert_eq!(reloc.symbol().unwrap().name, "puts");
    assert!(reloc.symbol().unwrap().is_undefined());
    assert!(reloc.to_string().contains("PLT32"));
    assert!(reloc.to_string().trim_end().ends_with("puts"));
}

#[test]
fn reads_i386_rel_text() {
    let data = object_calling_puts(Architecture::I386, RelocationKind::Relative);
    let relocations = ElfRelocations::parse(&data).unwrap();
    assert_eq!(relocations.arch(), Arch::I386);
    assert!(!relocations.is_64());

    let (section, reloc) = relocations
        .iter()
        .find(|(section, _)| section.name == ".rel.text")
        .expect("missing .rel.text");
    assert!(!section.is_rela);
    assert!(reloc.is_rel());
    assert_eq!(reloc.address(), 4);
    assert_eq!(reloc.addend(), 0);
    assert_eq!(reloc.type_name(), Ok("PC32"));
    assert_eq!(reloc.size(), Ok(4));
    assert_eq!(reloc.symbol().unwrap().name, "puts");
}

#[test]
fn identical_inputs_give_equal_entries() {
    let data = object_calling_puts(Architecture::X86_64, RelocationKind::PltRelative);
    let first = ElfRelocations::parse(&data).unwrap();
    let second = ElfRelocations::parse(&data).unwrap();

    let a: Vec<_> = first.iter().map(|(_, reloc)| reloc).collect();
    let b: Vec<_> = second.iter().map(|(_, reloc)| reloc).collect();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}
