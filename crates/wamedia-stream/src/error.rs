use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Crypto error: {0}")]
    Crypto(#[from] wamedia_crypto::CryptoError),

    #[error("I/O error while reading source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported operation: {0} on a transformed media stream")]
    UnsupportedOperation(&'static str),
}
