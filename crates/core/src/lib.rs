// ABOUTME: Main library entry point for the imprint content core.
// ABOUTME: Re-exports the public API: HashAlgorithm, fingerprint_file, fingerprint_reader, sanitize_keeping_structure, FingerprintError.

//! Imprint - content fingerprinting and markup sanitization.
//!
//! Two independent leaf components: a streaming file fingerprinter that
//! computes a cryptographic digest without loading the file into memory,
//! and an HTML sanitizer that strips every attribute while preserving tag
//! structure and text.
//!
//! # Example
//!
//! ```no_run
//! use imprint_core::{fingerprint_file, sanitize_keeping_structure, HashAlgorithm};
//!
//! fn main() -> Result<(), imprint_core::FingerprintError> {
//!     let digest = fingerprint_file("in.txt", HashAlgorithm::Sha256)?;
//!     println!("{digest}");
//!
//!     let clean = sanitize_keeping_structure("<body><p id=\"x\">Hi</p></body>");
//!     assert_eq!(clean, "<p>Hi</p>");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fingerprint;
pub mod sanitize;

pub use crate::error::FingerprintError;
pub use crate::fingerprint::{fingerprint_file, fingerprint_reader, HashAlgorithm};
pub use crate::sanitize::sanitize_keeping_structure;
