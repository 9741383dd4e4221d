//! threp CLI - Touhou replay decoding tools
//!
//! Applies the replay decode primitives to files: the legacy additive
//! cipher, the block-wise XOR cipher, and LZSS decompression. The
//! caller picks the cipher matching the file's format generation and
//! pipes the result through `decompress`.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use threp_codec::{LzssParams, decompress, decrypt_block, decrypt_legacy};
use threp_core::Result;

#[derive(Parser)]
#[command(name = "threp")]
#[command(author, version, about = "Touhou replay decryption and decompression")]
#[command(long_about = "
threp decodes the encrypted, LZSS-compressed bodies of Touhou replay
files. Pick the cipher matching the format generation, then decompress:

Examples:
  threp decrypt-legacy body.bin body.dec --key 0xAA
  threp decrypt-block body.bin body.dec --base 0xAA --add 0xE1
  threp decompress body.dec events.bin
  threp completions bash
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decrypt a legacy-format body (additive stream cipher)
    #[command(alias = "d6")]
    DecryptLegacy {
        /// Encrypted input file
        input: PathBuf,

        /// Decrypted output file
        output: PathBuf,

        /// Initial one-byte key (decimal or 0x-prefixed hex)
        #[arg(short, long, value_parser = parse_byte)]
        key: u8,

        /// Byte offset where decryption starts; the prefix is copied through
        #[arg(short, long, default_value_t = 0)]
        start: usize,
    },

    /// Decrypt a modern-format body (block-wise XOR cipher)
    #[command(alias = "d")]
    DecryptBlock {
        /// Encrypted input file
        input: PathBuf,

        /// Decrypted output file
        output: PathBuf,

        /// Nominal block size in bytes
        #[arg(short, long, default_value = "0x400", value_parser = parse_size)]
        block_size: usize,

        /// Initial XOR key byte (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_byte)]
        base: u8,

        /// Per-byte key increment (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_byte)]
        add: u8,
    },

    /// Decompress a decrypted LZSS body
    #[command(alias = "x")]
    Decompress {
        /// Compressed input file
        input: PathBuf,

        /// Decompressed output file
        output: PathBuf,

        /// Bits per window offset (window is 2^n bytes)
        #[arg(long, default_value_t = 13)]
        index_size: u32,

        /// Bits per match-length field
        #[arg(long, default_value_t = 4)]
        length_size: u32,

        /// Constant added to the length field
        #[arg(long, default_value_t = 3)]
        min_length: usize,

        /// Starting position of the window write cursor
        #[arg(long, default_value_t = 1)]
        initial_write_index: usize,

        /// Print input/output sizes
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse a one-byte key, accepting decimal or 0x-prefixed hex.
fn parse_byte(value: &str) -> std::result::Result<u8, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| format!("'{value}' is not a byte value"))
}

/// Parse a size, accepting decimal or 0x-prefixed hex.
fn parse_size(value: &str) -> std::result::Result<usize, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| format!("'{value}' is not a size"))
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::DecryptLegacy {
            input,
            output,
            key,
            start,
        } => cmd_decrypt_legacy(&input, &output, key, start),
        Commands::DecryptBlock {
            input,
            output,
            block_size,
            base,
            add,
        } => cmd_decrypt_block(&input, &output, block_size, base, add),
        Commands::Decompress {
            input,
            output,
            index_size,
            length_size,
            min_length,
            initial_write_index,
            verbose,
        } => {
            let params = LzssParams {
                index_size,
                length_size,
                min_length,
                initial_write_index,
            };
            cmd_decompress(&input, &output, params, verbose)
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "threp", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_decrypt_legacy(input: &Path, output: &Path, key: u8, start: usize) -> Result<()> {
    let mut body = fs::read(input)?;
    decrypt_legacy(&mut body, key, start);
    fs::write(output, body)?;
    Ok(())
}

fn cmd_decrypt_block(
    input: &Path,
    output: &Path,
    block_size: usize,
    base: u8,
    add: u8,
) -> Result<()> {
    let body = fs::read(input)?;
    let decrypted = decrypt_block(&body, block_size, base, add)?;
    fs::write(output, decrypted)?;
    Ok(())
}

fn cmd_decompress(input: &Path, output: &Path, params: LzssParams, verbose: bool) -> Result<()> {
    let body = fs::read(input)?;
    let events = decompress(&body, params)?;
    if verbose {
        println!("{} -> {} bytes", body.len(), events.len());
    }
    fs::write(output, events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte() {
        assert_eq!(parse_byte("170").unwrap(), 170);
        assert_eq!(parse_byte("0xAA").unwrap(), 0xAA);
        assert_eq!(parse_byte("0Xe1").unwrap(), 0xE1);
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0xZZ").is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("0x400").unwrap(), 0x400);
        assert!(parse_size("four").is_err());
    }

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }
}
