//! AES-256-CBC encryption with a truncated HMAC-SHA256 tag.
//!
//! Wire format:
//! [N bytes: AES-256-CBC(cipherKey, IV, PKCS#7(plaintext))][10 bytes: MAC]
//! MAC = HMAC-SHA256(macKey, IV || ciphertext)[..10]
//! IV, cipherKey and macKey come from the media key expansion.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::CryptoError;
use crate::media_keys::{derive_media_keys, DerivedKeys};
use crate::types::{MediaCategory, AES_BLOCK_SIZE, MAC_LENGTH};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Length of the frame produced by [`encrypt`] for a plaintext of `plaintext_len` bytes.
///
/// PKCS#7 always adds padding, so a block-aligned plaintext gains a full block.
pub const fn encrypted_len(plaintext_len: usize) -> usize {
    (plaintext_len / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE + MAC_LENGTH
}

/// Split a frame into `(ciphertext, mac)`.
pub fn split_frame(frame: &[u8]) -> Result<(&[u8], &[u8]), CryptoError> {
    if frame.len() < MAC_LENGTH {
        return Err(CryptoError::MalformedFrame { len: frame.len() });
    }
    Ok(frame.split_at(frame.len() - MAC_LENGTH))
}

/// First 10 bytes of HMAC-SHA256(macKey, IV || ciphertext).
fn compute_mac(keys: &DerivedKeys, ciphertext: &[u8]) -> Result<[u8; MAC_LENGTH], CryptoError> {
    let mut mac = HmacSha256::new_from_slice(keys.mac_key())
        .map_err(|e| CryptoError::CipherFailure(e.to_string()))?;
    mac.update(keys.iv());
    mac.update(ciphertext);
    let full = mac.finalize().into_bytes();

    let mut tag = [0u8; MAC_LENGTH];
    tag.copy_from_slice(&full[..MAC_LENGTH]);
    Ok(tag)
}

/// Encrypt media with the key expansion for `category`.
///
/// Returns: [ciphertext][MAC:10B]
///
/// # Arguments
/// * `plaintext` - Media bytes, any length
/// * `media_key` - 32-byte media key
/// * `category` - Media category (selects the HKDF info label)
pub fn encrypt(
    plaintext: &[u8],
    media_key: &[u8],
    category: MediaCategory,
) -> Result<Vec<u8>, CryptoError> {
    let keys = derive_media_keys(media_key, category)?;

    // Pad and encrypt in place, leaving the last MAC_LENGTH bytes for the tag
    let mut frame = vec![0u8; encrypted_len(plaintext.len())];
    let ciphertext_len = frame.len() - MAC_LENGTH;
    frame[..plaintext.len()].copy_from_slice(plaintext);
    Aes256CbcEnc::new_from_slices(keys.cipher_key(), keys.iv())
        .map_err(|e| CryptoError::CipherFailure(e.to_string()))?
        .encrypt_padded_mut::<Pkcs7>(&mut frame[..ciphertext_len], plaintext.len())
        .map_err(|_| CryptoError::CipherFailure("padding buffer too small".into()))?;

    let tag = compute_mac(&keys, &frame[..ciphertext_len])?;
    frame[ciphertext_len..].copy_from_slice(&tag);
    Ok(frame)
}

/// Verify the MAC of a frame, then decrypt it.
///
/// The ciphertext is never handed to the block cipher unless the MAC matches.
///
/// # Arguments
/// * `frame` - [ciphertext][MAC:10B] as produced by [`encrypt`]
/// * `media_key` - 32-byte media key
/// * `category` - Media category used at encryption time
pub fn decrypt(
    frame: &[u8],
    media_key: &[u8],
    category: MediaCategory,
) -> Result<Vec<u8>, CryptoError> {
    let (ciphertext, provided) = split_frame(frame)?;
    let keys = derive_media_keys(media_key, category)?;

    let expected = compute_mac(&keys, ciphertext)?;
    if !bool::from(expected[..].ct_eq(provided)) {
        return Err(CryptoError::AuthenticationFailed);
    }

    Aes256CbcDec::new_from_slices(keys.cipher_key(), keys.iv())
        .map_err(|e| CryptoError::CipherFailure(e.to_string()))?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| CryptoError::CipherFailure(format!("invalid padding: {}", e)))
}
