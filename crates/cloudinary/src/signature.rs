//! Request signing for the Cloudinary upload API.

use sha2::{Digest, Sha256};

/// Parameters that are sent with a request but never signed.
const UNSIGNED: &[&str] = &["file", "api_key", "resource_type", "cloud_name", "signature_algorithm"];

/// Compute the request signature: SHA-256 hex over the alphabetically sorted
/// `key=value` pairs joined by `&`, followed by the API secret.
///
/// Empty values and the unsigned parameters are skipped.
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut signed: Vec<&(&str, String)> = params
        .iter()
        .filter(|(key, value)| !value.is_empty() && !UNSIGNED.contains(key))
        .collect();
    signed.sort_by_key(|(key, _)| *key);

    let to_sign = signed
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
