//! Command-line front end for the Kuznyechik cipher library.
//!
//! A thin shell over [`kuznyechik::io`]: it parses arguments, derives an
//! output path under `output/`, installs a logger, and delegates to the
//! library's file-level encrypt/decrypt functions. Its behavior is not part
//! of the library's API contract and may change independently of it.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use kuznyechik::block::Block;
use kuznyechik::error::KuznyechikError;
use kuznyechik::io;
use kuznyechik::padding::Padding;

/// Encrypt or decrypt a file with the Kuznyechik block cipher.
#[derive(Parser, Debug)]
#[command(name = "kuznyechik", about = "GOST R 34.12-2015 Kuznyechik file cipher")]
struct Cli {
    /// Path to the input file.
    input: PathBuf,

    /// Whether to encrypt or decrypt the input.
    #[arg(value_enum)]
    mode: Mode,

    /// 64-character hex master key (32 bytes).
    #[arg(long, conflicts_with_all = ["key1", "key2"])]
    key_hex: Option<String>,

    /// First 16-byte key half, as 32 hex characters. Requires --key2.
    #[arg(long, requires = "key2")]
    key1: Option<String>,

    /// Second 16-byte key half, as 32 hex characters. Requires --key1.
    #[arg(long, requires = "key1")]
    key2: Option<String>,

    /// Padding policy applied to the trailing partial block.
    #[arg(long, value_enum, default_value_t = PaddingArg::Space)]
    padding: PaddingArg,

    /// Hex-encode the output file contents.
    #[arg(long)]
    hex_output: bool,

    /// Worker threads for the bulk driver (0 lets it decide).
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Encrypt,
    Decrypt,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaddingArg {
    Space,
    Pkcs7,
    #[value(name = "iso7816-4")]
    Iso7816_4,
}

impl From<PaddingArg> for Padding {
    fn from(arg: PaddingArg) -> Padding {
        match arg {
            PaddingArg::Space => Padding::Space,
            PaddingArg::Pkcs7 => Padding::Pkcs7,
            PaddingArg::Iso7816_4 => Padding::Iso7816_4,
        }
    }
}

enum Key {
    Hex(String),
    Halves(Block, Block),
}

fn resolve_key(cli: &Cli) -> Result<Key, KuznyechikError> {
    if let Some(hex_key) = &cli.key_hex {
        return Ok(Key::Hex(hex_key.clone()));
    }
    if let (Some(k1), Some(k2)) = (&cli.key1, &cli.key2) {
        let k1 = hex::decode(k1).map_err(|e| KuznyechikError::WrongKey {
            detail: format!("--key1: {e}"),
        })?;
        let k2 = hex::decode(k2).map_err(|e| KuznyechikError::WrongKey {
            detail: format!("--key2: {e}"),
        })?;
        return Ok(Key::Halves(Block::from_slice(&k1)?, Block::from_slice(&k2)?));
    }
    Err(KuznyechikError::WrongKey {
        detail: "provide either --key-hex or both --key1 and --key2".to_string(),
    })
}

fn output_path(input: &Path, mode: Mode) -> PathBuf {
    let prefix = match mode {
        Mode::Encrypt => "encrypted_",
        Mode::Decrypt => "decrypted_",
    };
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.bin".to_string());
    PathBuf::from("output").join(format!("{prefix}{file_name}"))
}

fn run(cli: Cli) -> Result<PathBuf, KuznyechikError> {
    let output = output_path(&cli.input, cli.mode);
    let padding: Padding = cli.padding.into();
    let key = resolve_key(&cli)?;

    match (key, cli.mode) {
        (Key::Hex(hex_key), Mode::Encrypt) => {
            io::encrypt_file_hex_key(&cli.input, &output, &hex_key, padding, cli.threads)?
        }
        (Key::Hex(hex_key), Mode::Decrypt) => {
            io::decrypt_file_hex_key(&cli.input, &output, &hex_key, padding, cli.threads)?
        }
        (Key::Halves(k1, k2), Mode::Encrypt) => {
            io::encrypt_file(&cli.input, &output, k1, k2, padding, cli.threads)?
        }
        (Key::Halves(k1, k2), Mode::Decrypt) => {
            io::decrypt_file(&cli.input, &output, k1, k2, padding, cli.threads)?
        }
    }

    if cli.hex_output {
        let raw = std::fs::read(&output)?;
        std::fs::write(&output, hex::encode(&raw))?;
    }

    Ok(output)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            log::info!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err @ (KuznyechikError::WrongKey { .. } | KuznyechikError::WrongLength { .. })) => {
            log::error!("{err}");
            ExitCode::from(1)
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests;
