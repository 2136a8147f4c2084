use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Unknown media category: {0:?} (expected IMAGE, VIDEO, AUDIO or DOCUMENT)")]
    UnknownMediaCategory(String),

    #[error("Invalid media key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Malformed frame: {len} bytes is shorter than the MAC")]
    MalformedFrame { len: usize },

    #[error("MAC mismatch: media data is corrupted or the key is wrong")]
    AuthenticationFailed,

    #[error("Cipher failure: {0}")]
    CipherFailure(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),
}
