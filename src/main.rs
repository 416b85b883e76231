//! # sealfile
//!
//! A small command-line tool for at-rest file confidentiality and integrity
//! using a symmetric key shared out-of-band.
//!
//! ## Architecture
//!
//! ```text
//!              ┌─────────────┐
//!              │  CLI (clap)  │
//!              └──────┬──────┘
//!                     │
//!            ┌────────┴────────┐
//!            ▼                 ▼
//!       ┌────────┐        ┌────────┐
//!       │  Key   │        │  File  │
//!       │(base64)│        │adapter │
//!       └────────┘        └───┬────┘
//!                             ▼
//!                      ┌────────────┐
//!                      │   Crypto   │
//!                      │ AES-256-CBC│
//!                      │ + HMAC-SHA2│
//!                      └─────┬──────┘
//!                            ▼
//!                      ┌────────────┐
//!                      │ Blob codec │
//!                      │ IV‖ct‖tag  │
//!                      └────────────┘
//! ```

mod blob;
mod crypto;
mod error;
mod file;
mod key;

use clap::{Parser, Subcommand};
use key::Key;
use std::path::{Path, PathBuf};

/// sealfile — encrypt and decrypt files with a shared symmetric key
#[derive(Parser, Debug)]
#[command(
    name = "sealfile",
    version,
    about = "Encrypt and decrypt files with AES-256-CBC + HMAC-SHA256 🔒",
    long_about = "sealfile encrypts files with AES-256-CBC and authenticates them with \
                  HMAC-SHA256 (encrypt-then-MAC), so tampered or wrongly-keyed data is \
                  rejected before any plaintext is produced.\n\n\
                  Keys are 256-bit values in URL-safe base64, generated with `sealfile keygen` \
                  and shared out-of-band between the encrypting and decrypting side."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new random 256-bit key and print it
    Keygen,

    /// Encrypt a file
    Encrypt {
        /// File to encrypt
        input: PathBuf,

        /// Key in URL-safe base64 (or set SEALFILE_KEY). Omit to generate a new one
        #[arg(short, long)]
        key: Option<String>,

        /// Output path (defaults to the input path with .enc appended)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a previously encrypted file
    Decrypt {
        /// File to decrypt
        input: PathBuf,

        /// Key in URL-safe base64 (or set SEALFILE_KEY)
        #[arg(short, long)]
        key: Option<String>,

        /// Output path (defaults to the input path without .enc, or with .dec appended)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Environment variable consulted when no `--key` flag is given.
const KEY_ENV_VAR: &str = "SEALFILE_KEY";

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", colored::Colorize::red("error:"), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> error::Result<()> {
    match cli.command {
        Command::Keygen => cmd_keygen(),
        Command::Encrypt { input, key, output } => {
            cmd_encrypt(&input, key.as_deref(), output.as_deref())
        }
        Command::Decrypt { input, key, output } => {
            cmd_decrypt(&input, key.as_deref(), output.as_deref())
        }
    }
}

// ─── Command Implementations ────────────────────────────────────────────────

fn cmd_keygen() -> error::Result<()> {
    println!("{}", Key::generate().encode());
    eprintln!(
        "  {} Store this key safely — data encrypted with it is unrecoverable without it.",
        colored::Colorize::yellow("!"),
    );
    Ok(())
}

fn cmd_encrypt(input: &Path, key_text: Option<&str>, output: Option<&Path>) -> error::Result<()> {
    let key = match resolve_key(key_text) {
        Some(text) => Key::decode(&text)?,
        None => {
            // No key supplied anywhere: generate one and hand it to the operator
            let key = Key::generate();
            eprintln!(
                "  New key: {}",
                colored::Colorize::bold(key.encode().as_str()),
            );
            key
        }
    };

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| appended(input, ".enc"));

    file::encrypt_file(input, &output, &key)?;

    eprintln!(
        "  {} Encrypted {} → {}",
        colored::Colorize::green("✓"),
        input.display(),
        output.display(),
    );
    Ok(())
}

fn cmd_decrypt(input: &Path, key_text: Option<&str>, output: Option<&Path>) -> error::Result<()> {
    let key_text = resolve_key(key_text)
        .ok_or_else(|| anyhow::anyhow!("decryption requires a key (--key or {KEY_ENV_VAR})"))?;
    let key = Key::decode(&key_text)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_decrypt_output(input));

    file::decrypt_file(input, &output, &key)?;

    eprintln!(
        "  {} Decrypted {} → {}",
        colored::Colorize::green("✓"),
        input.display(),
        output.display(),
    );
    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn resolve_key(flag: Option<&str>) -> Option<String> {
    flag.map(String::from)
        .or_else(|| std::env::var(KEY_ENV_VAR).ok())
}

fn appended(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Strips a trailing `.enc` when present, otherwise appends `.dec`.
fn default_decrypt_output(input: &Path) -> PathBuf {
    match input.to_str() {
        Some(s) if s.ends_with(".enc") => PathBuf::from(&s[..s.len() - 4]),
        _ => appended(input, ".dec"),
    }
}
