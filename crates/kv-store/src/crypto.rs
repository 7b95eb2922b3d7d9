//! At-rest encryption for stored values.

use base64::Engine;
use rand_core::{OsRng, RngCore};
use thiserror::Error;
use xsalsa20poly1305::aead::{Aead, KeyInit};
use xsalsa20poly1305::{Key, Nonce, XSalsa20Poly1305};

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 24;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("encryption key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),
    #[error("stored value too short to hold a nonce ({0} bytes)")]
    Truncated(usize),
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("hex error: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("failed to seal value")]
    Seal,
    #[error("failed to open value (wrong key or corrupt data)")]
    Open,
}

/// Transforms values on their way into and out of a store.
pub trait ValueCodec: Send + Sync {
    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;
    fn open(&self, stored: &[u8]) -> Result<Vec<u8>, CryptoError>;
    /// Short name for logs.
    fn label(&self) -> &'static str;
}

/// Stores values as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainCodec;

impl ValueCodec for PlainCodec {
    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(plaintext.to_vec())
    }

    fn open(&self, stored: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(stored.to_vec())
    }

    fn label(&self) -> &'static str {
        "plain"
    }
}

/// XSalsa20-Poly1305. Each stored value is `nonce (24 bytes) || ciphertext`.
pub struct SecretBoxCodec {
    cipher: XSalsa20Poly1305,
}

impl std::fmt::Debug for SecretBoxCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretBoxCodec(..)")
    }
}

impl SecretBoxCodec {
    pub fn new(key: [u8; KEY_LEN]) -> Self {
        Self {
            cipher: XSalsa20Poly1305::new(Key::from_slice(&key)),
        }
    }

    /// Parse a key written as `hex:<hex>`, `base64:<b64>`, 64 bare hex
    /// digits, or bare base64.
    pub fn parse(value: &str) -> Result<Self, CryptoError> {
        Ok(Self::new(parse_key(value)?))
    }
}

impl ValueCodec for SecretBoxCodec {
    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| CryptoError::Seal)?;

        let mut sealed = nonce.to_vec();
        sealed.extend(ciphertext);
        Ok(sealed)
    }

    fn open(&self, stored: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if stored.len() < NONCE_LEN {
            return Err(CryptoError::Truncated(stored.len()));
        }
        let (nonce, ciphertext) = stored.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::Open)
    }

    fn label(&self) -> &'static str {
        "secretbox"
    }
}

fn parse_key(value: &str) -> Result<[u8; KEY_LEN], CryptoError> {
    let value = value.trim();
    let base64 = base64::engine::general_purpose::STANDARD;

    let bytes = match (value.strip_prefix("hex:"), value.strip_prefix("base64:")) {
        (Some(hex_part), _) => hex::decode(hex_part)?,
        (_, Some(b64_part)) => base64.decode(b64_part)?,
        _ if value.len() == KEY_LEN * 2 && value.bytes().all(|b| b.is_ascii_hexdigit()) => {
            hex::decode(value)?
        }
        _ => base64.decode(value)?,
    };

    <[u8; KEY_LEN]>::try_from(bytes.as_slice())
        .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))
}
