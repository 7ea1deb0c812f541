use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

type HmacSha512 = Hmac<Sha512>;

pub fn sha256_hex(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

pub fn hmac_sha512_hex(input: &str, key: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(input.as_bytes());
    format!("{:x}", mac.finalize().into_bytes())
}

/// Signature for endpoints keyed only by time and client version.
pub fn sign_path(path: &str, ctime: &str, version: &str, secret_key: &str) -> String {
    let digest = sha256_hex(&format!("ctime={}version={}", ctime, version));
    hmac_sha512_hex(&format!("{}{}", path, digest), secret_key)
}

/// Signature for endpoints that also take an item id.
pub fn sign_path_with_id(
    path: &str,
    id: &str,
    ctime: &str,
    version: &str,
    secret_key: &str,
) -> String {
    let digest = sha256_hex(&format!("ctime={}id={}version={}", ctime, id, version));
    hmac_sha512_hex(&format!("{}{}", path, digest), secret_key)
}
