use crate::error::SignError;

/// Trait for signing canonical message bytes.
///
/// Implementations are sync — signing is CPU-bound.
/// For async backends (e.g. KMS), use `spawn_blocking`.
pub trait MessageSigner: Send + Sync {
    /// Sign canonical bytes. Returns the signature as Base64 text.
    ///
    /// The operation is atomic: either a complete Base64 signature is
    /// returned or an error, never a partial string.
    fn sign(&self, message: &[u8]) -> Result<String, SignError>;
}
