//! Content-addressable document hashing.
//!
//! The SHA-256 digest of the raw document bytes is the store's uniqueness
//! key: the same bytes always produce the same key regardless of filename
//! or processing time.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Chunk size for streaming large documents through the hasher.
const HASH_CHUNK_SIZE: usize = 8192;

/// Hash all bytes from a reader, streaming in fixed-size chunks.
pub fn hash_reader<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha256::new();
    let mut chunk = [0u8; HASH_CHUNK_SIZE];

    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        hasher.update(&chunk[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Hash an in-memory document.
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Hash a document file on disk.
pub fn hash_file(path: impl AsRef<Path>) -> std::io::Result<String> {
    hash_reader(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_bytes(b"invoice body"), hash_bytes(b"invoice body"));
    }

    #[test]
    fn test_distinct_bytes_distinct_keys() {
        assert_ne!(hash_bytes(b"invoice a"), hash_bytes(b"invoice b"));
    }

    #[test]
    fn test_hex_digest_shape() {
        let digest = hash_bytes(b"doc");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_reader_matches_bytes() {
        // Larger than one chunk so the streaming path is exercised.
        let data = vec![0x5au8; HASH_CHUNK_SIZE * 3 + 17];
        let streamed = hash_reader(data.as_slice()).unwrap();
        assert_eq!(streamed, hash_bytes(&data));
    }
}
