//! HKDF-SHA256 key derivation.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::CryptoError;

/// Fill `okm` with HKDF-SHA256 output.
///
/// No salt is used: per RFC 5869 an absent salt is a block of zero bytes,
/// and the extract step still runs over `ikm`.
///
/// # Arguments
/// * `ikm` - Input keying material
/// * `info` - Context and application-specific info
/// * `okm` - Output buffer, at most 255 * 32 bytes
pub fn hkdf_expand(ikm: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), CryptoError> {
    let hk = Hkdf::<Sha256>::new(None, ikm);
    hk.expand(info, okm)
        .map_err(|e| CryptoError::KeyDerivation(format!("HKDF expand failed: {}", e)))
}
