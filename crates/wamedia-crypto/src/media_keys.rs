//! Media key expansion.
//!
//! mediaKeyExpanded = HKDF-SHA256(mediaKey, salt=none, info=category label, L=112)
//! Layout: [IV:16][cipherKey:32][macKey:32][refKey:32]

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;
use crate::hkdf::hkdf_expand;
use crate::types::{
    MediaCategory, CIPHER_KEY_LENGTH, CIPHER_KEY_OFFSET, EXPANDED_KEY_LENGTH, IV_LENGTH,
    IV_OFFSET, MAC_KEY_LENGTH, MAC_KEY_OFFSET, MEDIA_KEY_LENGTH,
};

/// The 112-byte expansion of a media key for one category.
///
/// Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    expanded: [u8; EXPANDED_KEY_LENGTH],
}

impl DerivedKeys {
    /// AES-CBC IV, bytes [0, 16).
    pub fn iv(&self) -> &[u8] {
        &self.expanded[IV_OFFSET..IV_OFFSET + IV_LENGTH]
    }

    /// AES-256 key, bytes [16, 48).
    pub fn cipher_key(&self) -> &[u8] {
        &self.expanded[CIPHER_KEY_OFFSET..CIPHER_KEY_OFFSET + CIPHER_KEY_LENGTH]
    }

    /// HMAC-SHA256 key, bytes [48, 80).
    pub fn mac_key(&self) -> &[u8] {
        &self.expanded[MAC_KEY_OFFSET..MAC_KEY_OFFSET + MAC_KEY_LENGTH]
    }

    /// The full expansion, including the unused trailing 32 bytes.
    pub fn expanded(&self) -> &[u8; EXPANDED_KEY_LENGTH] {
        &self.expanded
    }
}

impl fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKeys").finish_non_exhaustive()
    }
}

/// Expand a 32-byte media key for the given category.
///
/// # Arguments
/// * `media_key` - 32-byte master key
/// * `category` - Media category selecting the HKDF info label
pub fn derive_media_keys(
    media_key: &[u8],
    category: MediaCategory,
) -> Result<DerivedKeys, CryptoError> {
    if media_key.len() != MEDIA_KEY_LENGTH {
        return Err(CryptoError::InvalidKeyLength {
            expected: MEDIA_KEY_LENGTH,
            got: media_key.len(),
        });
    }

    let mut keys = DerivedKeys {
        expanded: [0u8; EXPANDED_KEY_LENGTH],
    };
    hkdf_expand(media_key, category.info().as_bytes(), &mut keys.expanded)?;
    Ok(keys)
}
