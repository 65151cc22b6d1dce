//! Signing utilities for webhook alert payloads.

use sha2::Sha256;

/// Signs an alert payload using HMAC-SHA256, hex-encoded.
pub fn sign_alert(payload: &[u8], secret: &str) -> String {
    use hmac::{Hmac, Mac};

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies an alert signature in constant time.
pub fn verify_alert_signature(payload: &[u8], signature: &str, secret: &str) -> bool {
    use hmac::{Hmac, Mac};

    type HmacSha256 = Hmac<Sha256>;

    let Ok(bytes) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);
    mac.verify_slice(&bytes).is_ok()
}
