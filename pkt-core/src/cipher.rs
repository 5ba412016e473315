//! Twofish-EAX encryption and decryption.
//!
//! The key material is fixed by the target format and public knowledge, not
//! a secret: the format derives nothing per-file, so identical input must
//! produce an identical file.

use eax::Eax;
use eax::aead::generic_array::GenericArray;
use eax::aead::{Aead, KeyInit};
use twofish::Twofish;

use crate::error::{PktError, Result};

/// 16-byte Twofish key (0x89 repeated, fixed for .pkt files)
pub const KEY: [u8; 16] = [0x89; 16];

/// 16-byte EAX nonce (0x10 repeated, fixed for .pkt files)
pub const NONCE: [u8; 16] = [0x10; 16];

/// Length of the appended authentication tag in bytes
pub const TAG_LEN: usize = 16;

type TwofishEax = Eax<Twofish>;

/// Encrypt and authenticate `plain` (no associated data).
/// Output is the ciphertext with the 16-byte tag appended, so it is always
/// `plain.len() + 16` bytes. A fresh cipher context is built per call.
pub fn eax_encrypt_bytes(plain: &[u8]) -> Result<Vec<u8>> {
    let cipher = TwofishEax::new(GenericArray::from_slice(&KEY));

    cipher
        .encrypt(GenericArray::from_slice(&NONCE), plain)
        .map_err(|_| PktError::Format("EAX encryption failed".to_string()))
}

/// Verify the trailing 16-byte tag and decrypt.
/// The tag is checked in full before any plaintext is returned; a mismatch
/// yields [`PktError::Authentication`] and no output.
pub fn eax_decrypt_bytes(cipher_bytes: &[u8]) -> Result<Vec<u8>> {
    if cipher_bytes.len() < TAG_LEN {
        return Err(PktError::Format(format!(
            "ciphertext too short: {} bytes, the tag alone is {}",
            cipher_bytes.len(),
            TAG_LEN
        )));
    }

    let cipher = TwofishEax::new(GenericArray::from_slice(&KEY));

    cipher
        .decrypt(GenericArray::from_slice(&NONCE), cipher_bytes)
        .map_err(|_| PktError::Authentication)
}
