// ABOUTME: Streaming file fingerprinting over an incremental hash accumulator.
// ABOUTME: Provides HashAlgorithm selection and chunked digest computation.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use digest::DynDigest;

use crate::error::FingerprintError;

/// Read buffer size for streaming. Not part of the contract; the hash
/// observes every byte in file order regardless of chunking.
const BUF_SIZE: usize = 64 * 1024;

/// Hash algorithms supported for file fingerprinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Md5,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Returns a fresh incremental hasher for this algorithm.
    ///
    /// Each fingerprint operation owns its own accumulator; hashers are
    /// never shared across calls.
    fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            HashAlgorithm::Md5 => Box::new(md5::Md5::default()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            HashAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
        }
    }

    /// Length of this algorithm's digest in hex characters.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }

    /// Canonical lowercase name, matching what `from_str` accepts.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "md5" => Ok(HashAlgorithm::Md5),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(FingerprintError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Computes the digest of the file at `path`, streaming it chunk by chunk
/// so the whole file is never held in memory.
///
/// Returns the digest as a lowercase hex string (40/32/64/128 characters
/// for sha1/md5/sha256/sha512). Open and mid-stream read failures surface
/// as errors; a failed operation never yields a digest.
pub fn fingerprint_file(
    path: impl AsRef<Path>,
    algorithm: HashAlgorithm,
) -> Result<String, FingerprintError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FingerprintError::open(path, e))?;
    fingerprint_reader(file, algorithm).map_err(|e| FingerprintError::read(path, e))
}

/// Streams `reader` to end-of-data through an incremental hasher and
/// returns the lowercase hex digest.
pub fn fingerprint_reader<R: Read>(
    mut reader: R,
    algorithm: HashAlgorithm,
) -> io::Result<String> {
    let mut hasher = algorithm.hasher();
    let mut buf = [0u8; BUF_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            // Transient EINTR is retried, as Read::read_to_end does.
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
