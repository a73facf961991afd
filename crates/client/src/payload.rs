use paysign::TransactionFields;
use serde_json::Value;

/// Assembles the request payload: the transaction fields serialized as
/// a JSON object in their original order, with the Base64 signature
/// appended as the final `token` field.
///
/// The input mapping is not mutated; the signature is added to a copy,
/// so the fields that were signed stay exactly as they were signed.
pub fn prepare_payload(
    fields: &TransactionFields,
    signature: &str,
) -> Result<String, serde_json::Error> {
    let mut payload = fields.clone();
    payload.insert("token".to_string(), Value::String(signature.to_string()));
    serde_json::to_string(&payload)
}
