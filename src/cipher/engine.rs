//! AES-256 block transforms with PKCS7 padding.
//!
//! The engine is stateless: key material is borrowed per call and never
//! retained. Encryption always draws a fresh random IV, even for ECB where
//! it is cryptographically inert, so the container header stays a fixed
//! size regardless of mode.

use aes::Aes256;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use block_padding::Pkcs7;
use rand::RngCore;

use crate::cipher::CipherMode;
use crate::config::{BLOCK_SIZE, IV_SIZE};
use crate::error::{CoreError, Result};
use crate::key::KeyMaterial;

type EcbEnc = ecb::Encryptor<Aes256>;
type EcbDec = ecb::Decryptor<Aes256>;
type CbcEnc = cbc::Encryptor<Aes256>;
type CbcDec = cbc::Decryptor<Aes256>;

/// Encrypts `plaintext` under `key`, returning the generated IV and the
/// ciphertext.
///
/// The plaintext is PKCS7-padded to the next multiple of [`BLOCK_SIZE`], so
/// zero-length input is valid and produces one full block.
#[must_use]
pub fn encrypt(plaintext: &[u8], key: &KeyMaterial, mode: CipherMode) -> ([u8; IV_SIZE], Vec<u8>) {
    let mut iv = [0u8; IV_SIZE];
    rand::rng().fill_bytes(&mut iv);

    let ciphertext = match mode {
        CipherMode::Ecb => EcbEnc::new(key.expose_secret().into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        CipherMode::Cbc => CbcEnc::new(key.expose_secret().into(), (&iv).into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext),
    };

    (iv, ciphertext)
}

/// Decrypts `ciphertext` under `key`, removing the PKCS7 padding.
///
/// # Errors
///
/// Returns [`CoreError::DecryptionFailed`] when the ciphertext length is
/// not a multiple of the block size or the recovered padding is invalid.
/// A wrong key, a wrong mode, and corrupted bytes all fail this way; they
/// cannot be told apart and are reported identically.
pub fn decrypt(iv: &[u8; IV_SIZE], ciphertext: &[u8], key: &KeyMaterial, mode: CipherMode) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
        return Err(CoreError::DecryptionFailed);
    }

    let plaintext = match mode {
        CipherMode::Ecb => EcbDec::new(key.expose_secret().into()).decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        CipherMode::Cbc => CbcDec::new(key.expose_secret().into(), iv.into()).decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
    };

    plaintext.map_err(|_| CoreError::DecryptionFailed)
}
