//! Read-only, seekable view over a transformed media buffer.

use std::fmt;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use crate::error::StreamError;

/// Fixed in-memory output of an encrypt/decrypt transform.
///
/// Reads and seeks move a cursor over the bytes; the bytes themselves never
/// change. Writes are rejected with [`StreamError::UnsupportedOperation`].
#[derive(Clone, Default)]
pub struct MediaBuffer {
    inner: Cursor<Vec<u8>>,
}

impl MediaBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    /// Total size in bytes.
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    /// Current cursor position.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// True once the cursor is at or past the end.
    pub fn is_eof(&self) -> bool {
        self.inner.position() >= self.len() as u64
    }

    /// The whole buffer, independent of the cursor.
    pub fn contents(&self) -> &[u8] {
        self.inner.get_ref()
    }

    /// Bytes between the cursor and the end, without advancing.
    pub fn remaining(&self) -> &[u8] {
        let start = usize::try_from(self.inner.position())
            .map_or(self.len(), |pos| pos.min(self.len()));
        &self.inner.get_ref()[start..]
    }

    pub fn is_readable(&self) -> bool {
        true
    }

    pub fn is_seekable(&self) -> bool {
        true
    }

    pub fn is_writable(&self) -> bool {
        false
    }

    /// Detach the underlying bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl fmt::Debug for MediaBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaBuffer")
            .field("len", &self.len())
            .field("position", &self.position())
            .finish()
    }
}

impl Read for MediaBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for MediaBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl Write for MediaBuffer {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            StreamError::UnsupportedOperation("write"),
        ))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
