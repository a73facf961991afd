use std::io::ErrorKind;
use std::path::PathBuf;

use base64::{Engine, engine::general_purpose};
use openssl::hash::MessageDigest;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;
use zeroize::Zeroizing;

use super::signer::MessageSigner;
use crate::error::{KeyLoadError, SignError};

/// SHA-256 signer backed by a password-protected PKCS#12 bundle.
///
/// Holds only the bundle path and password; decrypted key material is
/// loaded per call and dropped before the call returns. Pure-Rust PKCS#12
/// decryption support is too limited for bundles produced by common
/// tooling, which is why OpenSSL is used here.
///
/// The signing scheme follows the key type (RSA keys sign with
/// PKCS#1 v1.5); the digest is fixed to SHA-256.
pub struct Pkcs12Signer {
    bundle_path: PathBuf,
    password: Zeroizing<String>,
}

impl Pkcs12Signer {
    pub fn new(bundle_path: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        Self {
            bundle_path: bundle_path.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Reads and decrypts the bundle, returning its private key.
    ///
    /// Each call performs its own file read and parse. No caching, so
    /// decrypted key material never outlives the calling operation.
    fn load_key(&self) -> Result<PKey<Private>, KeyLoadError> {
        let der = std::fs::read(&self.bundle_path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => KeyLoadError::NotFound {
                path: self.bundle_path.clone(),
            },
            _ => KeyLoadError::Io {
                path: self.bundle_path.clone(),
                source,
            },
        })?;

        let bundle = Pkcs12::from_der(&der).map_err(|source| KeyLoadError::BadBundle {
            path: self.bundle_path.clone(),
            source,
        })?;
        let parsed = bundle
            .parse2(self.password.as_str())
            .map_err(|source| KeyLoadError::BadBundle {
                path: self.bundle_path.clone(),
                source,
            })?;

        parsed.pkey.ok_or_else(|| KeyLoadError::MissingKey {
            path: self.bundle_path.clone(),
        })
    }

    /// SubjectPublicKeyInfo DER of the bundled key's public half,
    /// for signature verification tooling.
    pub fn verifying_key_der(&self) -> Result<Vec<u8>, SignError> {
        let key = self.load_key()?;
        Ok(key.public_key_to_der()?)
    }
}

impl MessageSigner for Pkcs12Signer {
    fn sign(&self, message: &[u8]) -> Result<String, SignError> {
        let key = self.load_key()?;

        let mut signer = Signer::new(MessageDigest::sha256(), &key)?;
        signer.update(message)?;
        let raw = signer.sign_to_vec()?;

        tracing::debug!(
            message_bytes = message.len(),
            signature_bytes = raw.len(),
            "message signed"
        );
        Ok(general_purpose::STANDARD.encode(raw))
    }
}
