//! Configuration module.
//!
//! This module defines the command-line interface (CLI) using `clap`.

use clap::Parser;
use std::path::PathBuf;

/// Lists the relocation entries of an ELF file.
///
/// Each entry is printed with its address, type, bound symbol, addend and
/// the number of bytes it patches.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Input ELF file (object, shared library or executable)
    pub input: PathBuf,

    /// Only list this relocation section (e.g. .rela.dyn)
    #[arg(short, long)]
    pub section: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", help = "Set the logging level")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arguments() {
        let config = Config::parse_from(["elfrel", "a.out", "--section", ".rela.plt"]);
        assert_eq!(config.input, PathBuf::from("a.out"));
        assert_eq!(config.section.as_deref(), Some(".rela.plt"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn input_is_required() {
        assert!(Config::try_parse_from(["elfrel"]).is_err());
    }
}
