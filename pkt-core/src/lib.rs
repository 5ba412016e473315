//! core functionality for encrypting and decrypting
//! Cisco Packet Tracer save files (.pkt <-> XML)
//!
//! # Modules
//!
//! - `cipher`: Twofish-EAX encryption and decryption
//! - `codec`: the four-stage encode/decode pipeline
//! - `error`: codec error kinds
//! - `frame`: zlib compression with length-prefix framing
//! - `obfuscate`: keyless XOR scrambling layers

pub mod cipher;
pub mod codec;
pub mod error;
pub mod frame;
pub mod obfuscate;

// Re-export commonly used items
pub use cipher::{KEY, NONCE, TAG_LEN, eax_decrypt_bytes, eax_encrypt_bytes};
pub use codec::{Silent, StageTrace, decode, decode_traced, encode, encode_traced};
pub use error::{PktError, Result};
pub use frame::{compress_frame, decompress_frame};
pub use obfuscate::{deobfuscate_outer, obfuscate_inner, obfuscate_outer};
