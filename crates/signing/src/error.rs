use std::path::PathBuf;

/// A transaction field value could not be canonicalized to text.
///
/// Carries the field name only; the value may be confidential and is
/// never included.
#[derive(Debug, thiserror::Error)]
#[error("transaction field `{field}` is not a text value")]
pub struct EncodingError {
    pub field: String,
}

/// Failed to obtain a private key from the certificate bundle.
///
/// Variants carry the bundle path for diagnostics, never the password
/// or raw key bytes.
#[derive(Debug, thiserror::Error)]
pub enum KeyLoadError {
    #[error("certificate bundle not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read certificate bundle {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Wrong password and corrupt bundle are indistinguishable at the
    /// OpenSSL layer and are reported as one kind.
    #[error("failed to decrypt certificate bundle {} (wrong password or corrupt bundle)", path.display())]
    BadBundle {
        path: PathBuf,
        #[source]
        source: openssl::error::ErrorStack,
    },
    #[error("certificate bundle {} contains no private key", path.display())]
    MissingKey { path: PathBuf },
}

/// Any failure of the signing operation.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error(transparent)]
    KeyLoad(#[from] KeyLoadError),
    #[error("signing operation failed: {0}")]
    Signing(#[from] openssl::error::ErrorStack),
}
