//! Entry point for the elfrel tool.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Map the input file and collect its relocation sections.
//! 3. Print every entry, one line each, grouped by section.
//!
//! Error handling is done via `anyhow`.

use anyhow::{Context, Result};
use clap::Parser;
use memmap2::Mmap;
use std::fs::File;
use tracing_subscriber::EnvFilter;

use elfrel::config::Config;
use elfrel::reader::ElfRelocations;

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = &config.input;
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mmap = unsafe { Mmap::map(&file)? };
    let relocations = ElfRelocations::parse(&mmap)
        .with_context(|| format!("failed to read relocations from {}", path.display()))?;

    tracing::info!(
        "{}: {} relocation sections, machine {}",
        path.display(),
        relocations.sections().len(),
        relocations.arch()
    );

    let mut printed = 0;
    for section in relocations.sections() {
        if config.section.as_deref().is_some_and(|name| name != section.name) {
            continue;
        }
        printed += 1;

        println!(
            "Relocation section '{}' contains {} entries:",
            section.name,
            section.len()
        );
        for reloc in relocations.relocations(section) {
            let size = match reloc.size() {
                Ok(size) => size.to_string(),
                Err(err) => {
                    tracing::warn!("0x{:x}: {}", reloc.address(), err);
                    "?".to_string()
                }
            };
            if reloc.is_rela() {
                println!("{}{:<10}{}", reloc, reloc.addend(), size);
            } else {
                println!("{}{:<10}{}", reloc, "", size);
            }
        }
        println!();
    }

    if let Some(name) = &config.section {
        if printed == 0 {
            anyhow::bail!("no relocation section named {}", name);
        }
    } else if printed == 0 {
        println!("There are no relocations in this file.");
    }
    Ok(())
}
