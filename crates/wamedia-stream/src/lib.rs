//! Stream adapters over the WhatsApp media transform.
//!
//! [`EncryptingStream`] and [`DecryptingStream`] drain a reader, run the
//! transform from `wamedia-crypto` once, and expose the result as a
//! read-only, seekable [`MediaBuffer`].

pub mod buffer;
pub mod error;
pub mod stream;

pub use buffer::MediaBuffer;
pub use error::StreamError;
pub use stream::{DecryptingStream, EncryptingStream};
pub use wamedia_crypto::MediaCategory;
