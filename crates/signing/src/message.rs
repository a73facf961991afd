use serde_json::Value;

use crate::error::EncodingError;

/// Ordered mapping of transaction field names to values.
///
/// `serde_json::Map` is built with `preserve_order`, so iteration order
/// is insertion order; that order determines the canonical message order.
pub type TransactionFields = serde_json::Map<String, Value>;

/// Builds the canonical signing message from the transaction fields.
///
/// Each entry is emitted as `UPPERCASE(key)=value` in iteration order,
/// joined with `,` and encoded as UTF-8. Keys and values must not
/// themselves contain `,` or `=`; escaping is the caller's
/// responsibility.
///
/// Every value must be a JSON string; any other type fails with
/// [`EncodingError`].
pub fn canonical_message(fields: &TransactionFields) -> Result<Vec<u8>, EncodingError> {
    let mut segments = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let value = value.as_str().ok_or_else(|| EncodingError { field: key.clone() })?;
        segments.push(format!("{}={}", key.to_uppercase(), value));
    }
    let message = segments.join(",");
    tracing::debug!(
        fields = fields.len(),
        message_bytes = message.len(),
        "canonical message built"
    );
    Ok(message.into_bytes())
}
