//! WhatsApp media encryption.
//!
//! A media key is expanded with HKDF-SHA256 under a per-category label into
//! IV, cipher key and MAC key. Media is encrypted with AES-256-CBC and framed
//! as `ciphertext || HMAC-SHA256(macKey, IV || ciphertext)[..10]`.
//! Decryption verifies the MAC in constant time before touching the cipher.

pub mod cipher;
pub mod error;
pub mod hkdf;
pub mod media_keys;
pub mod types;

pub use cipher::{decrypt, encrypt, encrypted_len, split_frame};
pub use error::CryptoError;
pub use hkdf::hkdf_expand;
pub use media_keys::{derive_media_keys, DerivedKeys};
pub use types::{
    MediaCategory, AES_BLOCK_SIZE, CIPHER_KEY_LENGTH, EXPANDED_KEY_LENGTH, IV_LENGTH,
    MAC_KEY_LENGTH, MAC_LENGTH, MEDIA_KEY_LENGTH,
};
