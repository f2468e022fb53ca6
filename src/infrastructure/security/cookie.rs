// src/infrastructure/security/cookie.rs
use crate::application::ports::security::CookieSigner;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs cookie values as `<value>.<base64url(hmac-sha256(value))>`.
#[derive(Clone)]
pub struct HmacCookieSigner {
    keyed: HmacSha256,
}

impl HmacCookieSigner {
    pub fn new(key: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self {
            keyed: HmacSha256::new_from_slice(key)?,
        })
    }

    fn mac(&self) -> HmacSha256 {
        self.keyed.clone()
    }
}

impl CookieSigner for HmacCookieSigner {
    fn sign(&self, value: &str) -> String {
        let mut mac = self.mac();
        mac.update(value.as_bytes());
        let tag = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{value}.{tag}")
    }

    fn verify(&self, signed: &str) -> Option<String> {
        let (value, tag) = signed.rsplit_once('.')?;
        let tag = URL_SAFE_NO_PAD.decode(tag).ok()?;

        let mut mac = self.mac();
        mac.update(value.as_bytes());
        mac.verify_slice(&tag).ok()?;
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_and_rejects_tampering() {
        let signer = HmacCookieSigner::new(&[7u8; 32]).unwrap();
        let signed = signer.sign("3f0c1c1e-8a52-4a8e-9a4e-5f8f2b7b1a10");

        assert_eq!(
            signer.verify(&signed).as_deref(),
            Some("3f0c1c1e-8a52-4a8e-9a4e-5f8f2b7b1a10")
        );

        let tampered = signed.replacen('3', "4", 1);
        assert_eq!(signer.verify(&tampered), None);
        assert_eq!(signer.verify("no-signature"), None);
    }

    #[test]
    fn other_key_does_not_verify() {
        let signed = HmacCookieSigner::new(b"first key").unwrap().sign("value");
        let other = HmacCookieSigner::new(b"second key").unwrap();
        assert_eq!(other.verify(&signed), None);
    }
}
