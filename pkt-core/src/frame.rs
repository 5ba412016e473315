//! zlib compression framing.
//!
//! Layout: [uncompressed length (4 BE) | zlib stream]
//!
//! The length prefix exists because the consuming runtime sizes its inflate
//! buffer up front; on unpack it doubles as an integrity check.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{PktError, Result};

/// Compress `input` with zlib at the default level and prepend its
/// uncompressed length as a 4-byte big-endian prefix.
///
/// The result is exactly prefix + emitted stream, no trailing padding.
pub fn compress_frame(input: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(input.len()).map_err(|_| {
        PktError::Format(format!(
            "payload too large for 4-byte length prefix: {} bytes",
            input.len()
        ))
    })?;

    let mut framed = Vec::with_capacity(input.len() / 2 + 16);
    framed.extend_from_slice(&len.to_be_bytes());

    // The encoder appends to the prefixed Vec and finish() hands it back
    // once the stream-end marker is written.
    let mut encoder = ZlibEncoder::new(framed, Compression::default());
    encoder
        .write_all(input)
        .map_err(|e| PktError::Format(format!("deflate failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| PktError::Format(format!("deflate failed: {e}")))
}

/// Read the 4-byte big-endian length prefix and inflate the remainder.
///
/// Fails if the frame is shorter than the prefix, the stream is malformed
/// or truncated, or the decompressed size differs from the prefix.
pub fn decompress_frame(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < 4 {
        return Err(PktError::Format(format!(
            "frame too short: {} bytes",
            input.len()
        )));
    }

    let expected = u32::from_be_bytes([input[0], input[1], input[2], input[3]]) as usize;

    let mut payload = Vec::new();
    let mut decoder = ZlibDecoder::new(&input[4..]);
    decoder
        .read_to_end(&mut payload)
        .map_err(|e| PktError::Format(format!("inflate failed: {e}")))?;

    if payload.len() != expected {
        return Err(PktError::Format(format!(
            "decompressed {} bytes but length prefix says {}",
            payload.len(),
            expected
        )));
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let payload = b"<PACKETTRACER5><VERSION>7.0.0</VERSION></PACKETTRACER5>";
        let framed = compress_frame(payload).unwrap();
        assert_eq!(decompress_frame(&framed).unwrap(), payload);
    }

    #[test]
    fn test_roundtrip_empty() {
        let framed = compress_frame(b"").unwrap();
        assert_eq!(&framed[..4], &[0, 0, 0, 0]);
        assert!(decompress_frame(&framed).unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_incompressible() {
        let payload: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
        let framed = compress_frame(&payload).unwrap();
        assert_eq!(decompress_frame(&framed).unwrap(), payload);
    }

    #[test]
    fn test_five_byte_prefix() {
        let framed = compress_frame(b"hello").unwrap();
        assert_eq!(&framed[..4], &[0x00, 0x00, 0x00, 0x05]);
        let payload = decompress_frame(&framed).unwrap();
        assert_eq!(payload.len(), 5);
        assert_eq!(payload, b"hello");
    }

    #[test]
    fn test_short_input() {
        for len in 0..4 {
            assert!(matches!(
                decompress_frame(&vec![0u8; len]),
                Err(PktError::Format(_))
            ));
        }
    }

    #[test]
    fn test_corrupt_stream_header() {
        let mut framed = compress_frame(b"hello world").unwrap();
        framed[4] ^= 0xff;
        assert!(matches!(decompress_frame(&framed), Err(PktError::Format(_))));
    }

    #[test]
    fn test_corrupt_stream_checksum() {
        // Last stream byte is part of the adler32 trailer
        let mut framed = compress_frame(b"hello world").unwrap();
        let last = framed.len() - 1;
        framed[last] ^= 0xff;
        assert!(matches!(decompress_frame(&framed), Err(PktError::Format(_))));
    }

    #[test]
    fn test_truncated_stream() {
        let framed = compress_frame(b"hello world").unwrap();
        let cut = &framed[..framed.len() - 4];
        assert!(matches!(decompress_frame(cut), Err(PktError::Format(_))));
    }

    #[test]
    fn test_length_prefix_mismatch() {
        let mut framed = compress_frame(b"hello").unwrap();
        framed[3] = 6;
        assert!(matches!(decompress_frame(&framed), Err(PktError::Format(_))));
    }

    #[test]
    fn test_length_prefix_impossible() {
        let mut framed = compress_frame(b"hello").unwrap();
        framed[..4].copy_from_slice(&[0xff; 4]);
        assert!(matches!(decompress_frame(&framed), Err(PktError::Format(_))));
    }
}
