use std::fmt;
use std::str::FromStr;

use crate::error::CryptoError;

/// Media key length in bytes (256 bits).
pub const MEDIA_KEY_LENGTH: usize = 32;

/// Length of the HKDF expansion of a media key.
///
/// Layout: [IV:16][cipherKey:32][macKey:32][refKey:32]
/// The trailing refKey is part of the expansion but unused here.
pub const EXPANDED_KEY_LENGTH: usize = 112;

/// AES-CBC IV length in bytes.
pub const IV_LENGTH: usize = 16;

/// AES-256 key length in bytes.
pub const CIPHER_KEY_LENGTH: usize = 32;

/// HMAC-SHA256 key length in bytes.
pub const MAC_KEY_LENGTH: usize = 32;

/// Truncated HMAC tag length appended to every frame.
pub const MAC_LENGTH: usize = 10;

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

pub(crate) const IV_OFFSET: usize = 0;
pub(crate) const CIPHER_KEY_OFFSET: usize = IV_OFFSET + IV_LENGTH;
pub(crate) const MAC_KEY_OFFSET: usize = CIPHER_KEY_OFFSET + CIPHER_KEY_LENGTH;

/// Media category selecting the HKDF info label.
///
/// The set is closed: a new category is a protocol change, not a runtime
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaCategory {
    /// All categories, in protocol order.
    pub const ALL: [MediaCategory; 4] = [
        MediaCategory::Image,
        MediaCategory::Video,
        MediaCategory::Audio,
        MediaCategory::Document,
    ];

    /// HKDF info label for this category.
    pub const fn info(self) -> &'static str {
        match self {
            MediaCategory::Image => "WhatsApp Image Keys",
            MediaCategory::Video => "WhatsApp Video Keys",
            MediaCategory::Audio => "WhatsApp Audio Keys",
            MediaCategory::Document => "WhatsApp Document Keys",
        }
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            MediaCategory::Image => "IMAGE",
            MediaCategory::Video => "VIDEO",
            MediaCategory::Audio => "AUDIO",
            MediaCategory::Document => "DOCUMENT",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MediaCategory {
    type Err = CryptoError;

    /// Case-insensitive match on the four category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaCategory::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CryptoError::UnknownMediaCategory(s.to_string()))
    }
}
