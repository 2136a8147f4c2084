//! Integration tests for the encrypting/decrypting stream decorators.

use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use wamedia_crypto::{encrypt, encrypted_len, CryptoError, MAC_LENGTH};
use wamedia_stream::{DecryptingStream, EncryptingStream, MediaCategory, StreamError};

// ============================================================================
// Helpers
// ============================================================================

fn media_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    for (i, b) in key.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(7) ^ 0xA5;
    }
    key
}

fn sample_media(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 13 % 256) as u8).collect()
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn encrypt_stream_feeds_decrypt_stream() {
    let key = media_key();
    let original = sample_media(4096 + 7);

    for category in MediaCategory::ALL {
        let encrypted =
            EncryptingStream::new(Cursor::new(original.clone()), &key, category).unwrap();
        assert_eq!(encrypted.len(), encrypted_len(original.len()));

        let mut decrypted = DecryptingStream::new(encrypted, &key, category).unwrap();
        let mut out = Vec::new();
        decrypted.read_to_end(&mut out).unwrap();
        assert_eq!(out, original);
    }
}

#[test]
fn stream_output_matches_core_transform() {
    let key = media_key();
    let original = sample_media(100);
    let stream = EncryptingStream::from_bytes(&original, &key, MediaCategory::Video).unwrap();
    let direct = encrypt(&original, &key, MediaCategory::Video).unwrap();
    assert_eq!(stream.contents(), &direct[..]);
}

#[test]
fn empty_source_round_trips() {
    let key = media_key();
    let encrypted = EncryptingStream::new(io::empty(), &key, MediaCategory::Document).unwrap();
    assert_eq!(encrypted.len(), 16 + MAC_LENGTH);

    let decrypted = DecryptingStream::new(encrypted, &key, MediaCategory::Document).unwrap();
    assert!(decrypted.is_empty());
    assert!(decrypted.is_eof());
}

// ============================================================================
// Stream semantics
// ============================================================================

#[test]
fn encrypted_stream_supports_seek_and_tell() {
    let key = media_key();
    let mut stream =
        EncryptingStream::new(Cursor::new(sample_media(40)), &key, MediaCategory::Image).unwrap();
    let frame = stream.contents().to_vec();

    let mac_start = (frame.len() - MAC_LENGTH) as u64;
    assert_eq!(stream.seek(SeekFrom::End(-(MAC_LENGTH as i64))).unwrap(), mac_start);
    assert_eq!(stream.position(), mac_start);

    let mut mac = [0u8; MAC_LENGTH];
    stream.read_exact(&mut mac).unwrap();
    assert_eq!(&mac[..], &frame[frame.len() - MAC_LENGTH..]);
    assert!(stream.is_eof());

    stream.rewind().unwrap();
    assert_eq!(stream.remaining(), &frame[..]);
}

#[test]
fn partial_reads_then_remaining() {
    let key = media_key();
    let original = sample_media(50);
    let frame = encrypt(&original, &key, MediaCategory::Audio).unwrap();
    let mut stream = DecryptingStream::new(Cursor::new(frame), &key, MediaCategory::Audio).unwrap();

    let mut head = [0u8; 20];
    stream.read_exact(&mut head).unwrap();
    assert_eq!(&head[..], &original[..20]);
    assert_eq!(stream.remaining(), &original[20..]);
    assert_eq!(stream.contents(), &original[..]);
}

#[test]
fn writes_are_unsupported_on_both_directions() {
    let key = media_key();
    let mut encrypted =
        EncryptingStream::from_bytes(b"payload", &key, MediaCategory::Image).unwrap();
    let frame = encrypted.contents().to_vec();
    let mut decrypted = DecryptingStream::from_bytes(&frame, &key, MediaCategory::Image).unwrap();

    for err in [
        encrypted.write(b"x").unwrap_err(),
        decrypted.write_all(b"x").unwrap_err(),
    ] {
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
        let inner = err.into_inner().unwrap().downcast::<StreamError>().unwrap();
        assert!(matches!(*inner, StreamError::UnsupportedOperation(_)));
    }
    assert_eq!(encrypted.contents(), &frame[..]);
    assert_eq!(decrypted.contents(), b"payload");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn wrong_category_is_rejected() {
    let key = media_key();
    let encrypted =
        EncryptingStream::new(Cursor::new(b"voice".to_vec()), &key, MediaCategory::Audio).unwrap();
    let err = DecryptingStream::new(encrypted, &key, MediaCategory::Video).unwrap_err();
    assert!(matches!(
        err,
        StreamError::Crypto(CryptoError::AuthenticationFailed)
    ));
}

#[test]
fn truncated_frame_is_rejected() {
    let key = media_key();
    let frame = encrypt(b"some media", &key, MediaCategory::Image).unwrap();
    let truncated = &frame[..frame.len() - 1];
    let err = DecryptingStream::from_bytes(truncated, &key, MediaCategory::Image).unwrap_err();
    assert!(matches!(
        err,
        StreamError::Crypto(CryptoError::AuthenticationFailed)
    ));
}

#[test]
fn invalid_key_length_is_rejected() {
    let err = EncryptingStream::new(Cursor::new(b"x".to_vec()), &[0u8; 31], MediaCategory::Audio)
        .unwrap_err();
    assert!(matches!(
        err,
        StreamError::Crypto(CryptoError::InvalidKeyLength { expected: 32, got: 31 })
    ));
}

#[test]
fn error_messages_are_descriptive() {
    let err = DecryptingStream::new_with_type(io::empty(), &media_key(), "sticker").unwrap_err();
    assert!(err.to_string().contains("Unknown media category"));
}
