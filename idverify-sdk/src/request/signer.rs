use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use http::Method;
use rsa::{
    pkcs1::DecodeRsaPrivateKey,
    pkcs1v15::SigningKey,
    pkcs8::{DecodePrivateKey, EncodePublicKey},
    signature::{SignatureEncoding, Signer},
    Pkcs1v15Encrypt, RsaPrivateKey,
};
use sha2::Sha256;

pub use rsa::RsaPublicKey;

use super::Payload;
use crate::error::{SdkError, SdkResult};

/// Signs outgoing requests with the application's RSA private key.
///
/// The signed message is `METHOD&/path?query`, followed by `&base64(payload)`
/// when the request carries a body. Signatures are RSA-SHA256 with PKCS#1 v1.5
/// padding, so identical messages always yield identical digests. The
/// timestamp and nonce live in the query string and are chosen by the caller,
/// which keeps signing reproducible.
///
/// The same key unwraps the encrypted tokens and receipt keys of a share.
pub struct RequestSigner {
    private_key: RsaPrivateKey,
    signing_key: SigningKey<Sha256>,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Loads a PEM-encoded key, either PKCS#8 (`PRIVATE KEY`) or PKCS#1 (`RSA PRIVATE KEY`)
    ///
    /// # Errors
    /// Returns `SdkError::Credential` if the PEM cannot be decoded as an RSA key
    pub fn from_pem(pem: &str) -> SdkResult<Self> {
        let pem = pem.trim();

        let private_key = match RsaPrivateKey::from_pkcs8_pem(pem) {
            Ok(private_key) => private_key,
            Err(_) => RsaPrivateKey::from_pkcs1_pem(pem)
                .map_err(|e| SdkError::Credential(format!("unsupported private key: {e}")))?,
        };

        Ok(Self::from_private_key(private_key))
    }

    /// Wraps an existing private key
    #[must_use]
    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        Self {
            signing_key: SigningKey::<Sha256>::new(private_key.clone()),
            private_key,
        }
    }

    /// Public half of the key, for verifying digests
    #[must_use]
    pub fn public_key(&self) -> RsaPublicKey {
        self.private_key.to_public_key()
    }

    /// Base64 DER (`SubjectPublicKeyInfo`) of the public key
    ///
    /// # Errors
    /// Returns `SdkError::Credential` if the key cannot be DER-encoded
    pub fn public_key_base64(&self) -> SdkResult<String> {
        let der = self
            .public_key()
            .to_public_key_der()
            .map_err(|e| SdkError::Credential(format!("cannot encode public key: {e}")))?;

        Ok(STANDARD.encode(der.as_bytes()))
    }

    /// The exact message covered by the signature
    #[must_use]
    pub fn message(method: &Method, path_and_query: &str, payload: Option<&Payload>) -> String {
        let mut message = format!("{}&{path_and_query}", method.as_str());
        if let Some(payload) = payload {
            message.push('&');
            message.push_str(&payload.to_base64());
        }
        message
    }

    /// Base64 RSA-SHA256 signature over [`RequestSigner::message`]
    #[must_use]
    pub fn sign(&self, method: &Method, path_and_query: &str, payload: Option<&Payload>) -> String {
        let message = Self::message(method, path_and_query, payload);
        let signature = self.signing_key.sign(message.as_bytes());
        STANDARD.encode(signature.to_bytes())
    }

    /// Decrypts PKCS#1 v1.5 ciphertext addressed to this key
    ///
    /// # Errors
    /// Returns `SdkError::Decryption` if the ciphertext was not encrypted for this key
    pub fn decrypt(&self, ciphertext: &[u8]) -> SdkResult<Vec<u8>> {
        self.private_key
            .decrypt(Pkcs1v15Encrypt, ciphertext)
            .map_err(|e| SdkError::Decryption(format!("RSA decryption failed: {e}")))
    }
}
