// ABOUTME: CLI for fingerprinting files and sanitizing markup with imprint-core.
// ABOUTME: Wires file reads to the core routines and prints digests or sanitized HTML.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use imprint_core::{fingerprint_file, sanitize_keeping_structure, HashAlgorithm};
use serde_json::json;

/// Fingerprint files and sanitize markup.
#[derive(Parser, Debug)]
#[command(name = "imprint")]
#[command(about = "Content fingerprinting and attribute-stripping sanitization", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a streaming digest of one or more files.
    Fingerprint {
        /// File path(s) to fingerprint.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Digest algorithm: sha1, md5, sha256, or sha512.
        #[arg(long, default_value = "sha256")]
        algorithm: HashAlgorithm,

        /// Emit one JSON object per path instead of checksum lines.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Strip all attributes from a markup file, keeping tags and text.
    Sanitize {
        /// Input file path. Use "-" to read from stdin.
        input: String,

        /// Write the sanitized markup here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Fingerprint {
            paths,
            algorithm,
            json,
        } => run_fingerprint(&paths, algorithm, json),
        Command::Sanitize { input, output } => run_sanitize(&input, output.as_deref()),
    }
}

fn run_fingerprint(paths: &[PathBuf], algorithm: HashAlgorithm, json: bool) -> Result<()> {
    let mut failed = 0usize;

    for path in paths {
        match fingerprint_file(path, algorithm) {
            Ok(digest) => {
                if json {
                    println!(
                        "{}",
                        json!({
                            "path": path.display().to_string(),
                            "algorithm": algorithm.to_string(),
                            "ok": true,
                            "digest": digest,
                            "error": null
                        })
                    );
                } else {
                    println!("{}  {}", digest, path.display());
                }
            }
            Err(err) => {
                failed += 1;
                if json {
                    println!(
                        "{}",
                        json!({
                            "path": path.display().to_string(),
                            "algorithm": algorithm.to_string(),
                            "ok": false,
                            "digest": null,
                            "error": err.to_string()
                        })
                    );
                } else {
                    eprintln!("imprint: {}", err);
                }
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} file(s) could not be fingerprinted",
            failed,
            paths.len()
        );
    }
    Ok(())
}

fn run_sanitize(input: &str, output: Option<&Path>) -> Result<()> {
    let markup = read_input(input)?;
    let sanitized = sanitize_keeping_structure(&markup);

    match output {
        Some(path) => {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() && !dir.exists() {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("failed to create {}", dir.display()))?;
                }
            }
            fs::write(path, sanitized)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(sanitized.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
}
