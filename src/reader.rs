//! ELF relocation section reader.
//!
//! Walks the section headers of an ELF file, decodes every `SHT_REL` and
//! `SHT_RELA` section into [`Relocation`]s tagged with the file's machine, and
//! loads the symbol tables those sections link to. Entries are handed out
//! with their symbols bound, borrowing from the reader.

use anyhow::{bail, Context, Result};
use object::elf::{FileHeader32, FileHeader64, SHT_REL, SHT_RELA};
use object::read::elf::{FileHeader, SectionHeader, SectionTable, Sym};
use object::read::SectionIndex;
use object::{Endianness, FileKind};
use std::collections::HashMap;

use crate::arch::Arch;
use crate::raw::RawRelocation;
use crate::relocation::Relocation;
use crate::symbol::Symbol;

/// A relocation section of the input file.
#[derive(Debug, Clone)]
pub struct RelocationSection {
    /// Section name, e.g. `.rela.dyn`.
    pub name: String,
    /// Whether records carry explicit addends (`SHT_RELA`).
    pub is_rela: bool,
    /// Section index of the linked symbol table, if any.
    pub symtab: Option<usize>,
    /// Decoded records paired with their symbol index.
    entries: Vec<(Relocation<'static>, u32)>,
}

impl RelocationSection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All relocations of one ELF file.
pub struct ElfRelocations {
    arch: Arch,
    is_64: bool,
    sections: Vec<RelocationSection>,
    /// Symbol tables keyed by section index.
    symbol_tables: HashMap<usize, Vec<Symbol>>,
}

impl ElfRelocations {
    /// Parses an ELF32 or ELF64 file of either byte order.
    pub fn parse(data: &[u8]) -> Result<Self> {
        match FileKind::parse(data).context("failed to identify file")? {
            FileKind::Elf32 => parse_elf::<FileHeader32<Endianness>>(data),
            FileKind::Elf64 => parse_elf::<FileHeader64<Endianness>>(data),
            kind => bail!("not an ELF file: {:?}", kind),
        }
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    pub fn is_64(&self) -> bool {
        self.is_64
    }

    pub fn sections(&self) -> &[RelocationSection] {
        &self.sections
    }

    pub fn symbols(&self, symtab: usize) -> Option<&[Symbol]> {
        self.symbol_tables.get(&symtab).map(Vec::as_slice)
    }

    /// The entries of `section`, with symbols bound.
    ///
    /// Symbol index 0 means "no symbol". An index past the end of the
    /// linked table is logged and the entry is left unbound.
    pub fn relocations<'a>(
        &'a self,
        section: &'a RelocationSection,
    ) -> impl Iterator<Item = Relocation<'a>> + 'a {
        let symbols = section.symtab.and_then(|index| self.symbols(index));
        section.entries.iter().map(move |(entry, sym_index)| {
            let mut reloc: Relocation<'a> = entry.clone();
            if *sym_index != 0 {
                match symbols.and_then(|table| table.get(*sym_index as usize)) {
                    Some(symbol) => reloc.bind(symbol),
                    None => tracing::warn!(
                        "{}: relocation at 0x{:x} references missing symbol {}",
                        section.name,
                        reloc.address(),
                        sym_index
                    ),
                }
            }
            reloc
        })
    }

    /// Every relocation of the file, paired with its section.
    pub fn iter(&self) -> impl Iterator<Item = (&RelocationSection, Relocation<'_>)> {
        self.sections
            .iter()
            .flat_map(move |section| {
                self.relocations(section)
                    .map(move |reloc| (section, reloc))
            })
    }
}

fn parse_elf<Elf>(data: &[u8]) -> Result<ElfRelocations>
where
    Elf: FileHeader<Endian = Endianness>,
    Elf::Rel: RawRelocation<Endianness>,
    Elf::Rela: RawRelocation<Endianness>,
{
    let header = Elf::parse(data).context("failed to parse ELF header")?;
    let endian = header.endian()?;
    let arch = Arch::from_machine(header.e_machine(endian));
    let is_64 = header.is_type_64();
    tracing::debug!("machine {} ({}-bit)", arch, if is_64 { 64 } else { 32 });

    let sections = header
        .sections(endian, data)
        .context("failed to read section headers")?;

    let mut relocation_sections = Vec::new();
    let mut symbol_tables = HashMap::new();

    for (index, section) in sections.iter().enumerate() {
        let is_rela = match section.sh_type(endian) {
            SHT_REL => false,
            SHT_RELA => true,
            _ => continue,
        };
        let name = sections.section_name(endian, section)?;
        let name = String::from_utf8_lossy(name).into_owned();

        let entries = if is_rela {
            decode_section::<Elf, Elf::Rela>(section, endian, data, arch)
        } else {
            decode_section::<Elf, Elf::Rel>(section, endian, data, arch)
        }
        .with_context(|| format!("failed to read relocations of section {index} ({name})"))?;
        tracing::debug!("{}: {} entries", name, entries.len());

        let link = section.sh_link(endian) as usize;
        let symtab = if link == 0 {
            None
        } else {
            if !symbol_tables.contains_key(&link) {
                let symbols = read_symbols(&sections, endian, data, link).with_context(|| {
                    format!("failed to read symbol table {link} linked from {name}")
                })?;
                symbol_tables.insert(link, symbols);
            }
            Some(link)
        };

        relocation_sections.push(RelocationSection {
            name,
            is_rela,
            symtab,
            entries,
        });
    }

    Ok(ElfRelocations {
        arch,
        is_64,
        sections: relocation_sections,
        symbol_tables,
    })
}

fn decode_section<Elf, R>(
    section: &Elf::SectionHeader,
    endian: Endianness,
    data: &[u8],
    arch: Arch,
) -> Result<Vec<(Relocation<'static>, u32)>>
where
    Elf: FileHeader<Endian = Endianness>,
    R: RawRelocation<Endianness> + object::pod::Pod,
{
    let records = section.data_as_array::<R, _>(endian, data)?;
    Ok(records
        .iter()
        .map(|raw| {
            let mut reloc = raw.decode(endian);
            reloc.set_architecture(arch);
            tracing::trace!("decoded {}", reloc);
            (reloc, raw.symbol_index(endian))
        })
        .collect())
}

fn read_symbols<'data, Elf>(
    sections: &SectionTable<'data, Elf, &'data [u8]>,
    endian: Endianness,
    data: &'data [u8],
    index: usize,
) -> Result<Vec<Symbol>>
where
    Elf: FileHeader<Endian = Endianness>,
{
    let table = sections.symbol_table_by_index(endian, data, SectionIndex(index))?;
    let strings = table.strings();
    table
        .symbols()
        .iter()
        .map(|sym| -> Result<Symbol> {
            let name = sym.name(endian, strings)?;
            Ok(Symbol {
                name: String::from_utf8_lossy(name).into_owned(),
                value: sym.st_value(endian).into(),
                size: sym.st_size(endian).into(),
                bind: sym.st_bind(),
                kind: sym.st_type(),
                section_index: sym.st_shndx(endian),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_elf_input() {
        let err = ElfRelocations::parse(b"definitely not an object file").err();
        assert!(err.is_some());
    }

    #[test]
    fn empty_section_list() {
        let section = RelocationSection {
            name: ".rela.dyn".into(),
            is_rela: true,
            symtab: None,
            entries: Vec::new(),
        };
        assert!(section.is_empty());
        assert_eq!(section.len(), 0);
    }
}
