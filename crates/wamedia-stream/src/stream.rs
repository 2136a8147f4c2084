//! Encrypting and decrypting stream decorators.
//!
//! Encrypt: drain source → encrypt(mediaKey, category) → MediaBuffer [ciphertext][MAC]
//! Decrypt: drain source → verify MAC → decrypt → MediaBuffer [plaintext]
//!
//! The transform runs once, eagerly, in the constructor.

use std::io::{self, Read, Seek, SeekFrom, Write};
use std::ops::{Deref, DerefMut};

use tracing::debug;
use wamedia_crypto::{decrypt, encrypt, MediaCategory};
use zeroize::Zeroizing;

use crate::buffer::MediaBuffer;
use crate::error::StreamError;

/// Read `source` to the end. Whatever was read is wiped on drop, including
/// a partial read cut short by an error.
fn drain<R: Read>(mut source: R) -> Result<Zeroizing<Vec<u8>>, StreamError> {
    let mut data = Zeroizing::new(Vec::new());
    source.read_to_end(&mut data)?;
    Ok(data)
}

/// Ciphertext view of a plaintext source.
#[derive(Debug, Clone)]
pub struct EncryptingStream {
    buffer: MediaBuffer,
    category: MediaCategory,
}

impl EncryptingStream {
    /// Drain `source` and encrypt it.
    ///
    /// # Arguments
    /// * `source` - Plaintext reader, read to the end
    /// * `media_key` - 32-byte media key
    /// * `category` - Media category
    pub fn new<R: Read>(
        source: R,
        media_key: &[u8],
        category: MediaCategory,
    ) -> Result<Self, StreamError> {
        let plaintext = drain(source)?;
        Self::from_bytes(&plaintext, media_key, category)
    }

    /// Like [`EncryptingStream::new`], with the category given by name.
    ///
    /// An unknown name fails before the source is read.
    pub fn new_with_type<R: Read>(
        source: R,
        media_key: &[u8],
        media_type: &str,
    ) -> Result<Self, StreamError> {
        let category = media_type.parse::<MediaCategory>()?;
        Self::new(source, media_key, category)
    }

    /// Encrypt a plaintext already held in memory.
    pub fn from_bytes(
        plaintext: &[u8],
        media_key: &[u8],
        category: MediaCategory,
    ) -> Result<Self, StreamError> {
        let frame = encrypt(plaintext, media_key, category)
            .inspect_err(|e| debug!(%category, error = %e, "media encryption failed"))?;
        debug!(
            %category,
            plaintext_len = plaintext.len(),
            frame_len = frame.len(),
            "media encrypted"
        );
        Ok(Self {
            buffer: MediaBuffer::new(frame),
            category,
        })
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    /// Detach the encrypted frame.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer.into_inner()
    }
}

/// Plaintext view of an encrypted source.
///
/// Construction fails unless the MAC verifies; no plaintext is ever exposed
/// for a frame that does not authenticate.
#[derive(Debug, Clone)]
pub struct DecryptingStream {
    buffer: MediaBuffer,
    category: MediaCategory,
}

impl DecryptingStream {
    /// Drain `source` and decrypt it.
    ///
    /// # Arguments
    /// * `source` - Reader over [ciphertext][MAC:10B], read to the end
    /// * `media_key` - 32-byte media key
    /// * `category` - Media category used at encryption time
    pub fn new<R: Read>(
        source: R,
        media_key: &[u8],
        category: MediaCategory,
    ) -> Result<Self, StreamError> {
        let frame = drain(source)?;
        Self::from_bytes(&frame, media_key, category)
    }

    /// Like [`DecryptingStream::new`], with the category given by name.
    ///
    /// An unknown name fails before the source is read.
    pub fn new_with_type<R: Read>(
        source: R,
        media_key: &[u8],
        media_type: &str,
    ) -> Result<Self, StreamError> {
        let category = media_type.parse::<MediaCategory>()?;
        Self::new(source, media_key, category)
    }

    /// Decrypt a frame already held in memory.
    pub fn from_bytes(
        frame: &[u8],
        media_key: &[u8],
        category: MediaCategory,
    ) -> Result<Self, StreamError> {
        let plaintext = decrypt(frame, media_key, category).inspect_err(|e| {
            debug!(%category, frame_len = frame.len(), error = %e, "media decryption rejected")
        })?;
        debug!(
            %category,
            frame_len = frame.len(),
            plaintext_len = plaintext.len(),
            "media decrypted"
        );
        Ok(Self {
            buffer: MediaBuffer::new(plaintext),
            category,
        })
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    /// Detach the decrypted plaintext.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer.into_inner()
    }
}

macro_rules! media_buffer_view {
    ($stream:ty) => {
        impl Deref for $stream {
            type Target = MediaBuffer;

            fn deref(&self) -> &MediaBuffer {
                &self.buffer
            }
        }

        impl DerefMut for $stream {
            fn deref_mut(&mut self) -> &mut MediaBuffer {
                &mut self.buffer
            }
        }

        impl Read for $stream {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                self.buffer.read(buf)
            }
        }

        impl Seek for $stream {
            fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
                self.buffer.seek(pos)
            }
        }

        impl Write for $stream {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.buffer.write(buf)
            }

            fn flush(&mut self) -> io::Result<()> {
                self.buffer.flush()
            }
        }
    };
}

media_buffer_view!(EncryptingStream);
media_buffer_view!(DecryptingStream);
