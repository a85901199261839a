//! Gzip codec

use bytes::Bytes;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use msgzip_core::{Error, Result};
use std::io::{self, Read, Write};

/// Gzip member magic bytes
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Slowest, smallest output
pub const BEST_LEVEL: u32 = 9;

/// Encode `data` as a single gzip member
pub fn encode(data: &[u8], level: u32) -> Result<Bytes> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level.min(BEST_LEVEL)));
    encoder.write_all(data).map_err(Error::Encoding)?;
    let compressed = encoder.finish().map_err(Error::Encoding)?;
    Ok(Bytes::from(compressed))
}

/// Decode a gzip stream
///
/// Fails on a missing magic, a truncated stream, or a checksum mismatch.
pub fn decode(data: &[u8]) -> Result<Bytes> {
    if !data.starts_with(&GZIP_MAGIC) {
        return Err(Error::Decoding(io::Error::new(
            io::ErrorKind::InvalidData,
            "missing gzip magic header",
        )));
    }

    let mut decoded = Vec::new();
    GzDecoder::new(data)
        .read_to_end(&mut decoded)
        .map_err(Error::Decoding)?;
    Ok(Bytes::from(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_has_gzip_header() {
        let compressed = encode(b"We're testing", BEST_LEVEL).unwrap();
        assert!(compressed.starts_with(&GZIP_MAGIC));
        // Deflate compression method
        assert_eq!(compressed[2], 8);
    }

    #[test]
    fn test_encode_shrinks_repetitive_input() {
        let data = "Hello, World! This is a test string that should compress well. ".repeat(100);
        let compressed = encode(data.as_bytes(), BEST_LEVEL).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(&decode(&compressed).unwrap()[..], data.as_bytes());
    }

    #[test]
    fn test_empty_input() {
        let compressed = encode(b"", BEST_LEVEL).unwrap();
        assert!(!compressed.is_empty());
        assert!(decode(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_plain_text() {
        assert!(matches!(decode(b"not gzip at all"), Err(Error::Decoding(_))));
        assert!(matches!(decode(b""), Err(Error::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_truncated_stream() {
        let compressed = encode(b"We're testing", BEST_LEVEL).unwrap();
        let truncated = &compressed[..compressed.len() - 6];
        assert!(matches!(decode(truncated), Err(Error::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_checksum_mismatch() {
        let mut compressed = encode(b"We're testing", BEST_LEVEL).unwrap().to_vec();
        // CRC32 is the first trailer word
        let crc_at = compressed.len() - 8;
        compressed[crc_at] ^= 0xff;
        assert!(matches!(decode(&compressed), Err(Error::Decoding(_))));
    }
}
