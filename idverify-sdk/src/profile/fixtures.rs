//! Encrypted tokens and receipts built the way the sharing API builds them

use aes::Aes256;
use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE},
    Engine,
};
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use prost::Message as ProstMessage;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use serde_json::{json, Value};

use super::proto::{Attribute, AttributeList, EncryptedData};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

pub const RECEIPT_KEY: [u8; 32] = [0x2a; 32];
pub const RECEIPT_IV: [u8; 16] = [0x11; 16];
pub const RECEIPT_ID: &str = "receipt-id-1";
pub const RECEIPT_TOKEN: &str = "receipt-token";
pub const REMEMBER_ME_ID: &str = "remember-me-id";
pub const PARENT_REMEMBER_ME_ID: &str = "parent-remember-me-id";

fn rsa_encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> Vec<u8> {
    public_key
        .encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, plaintext)
        .expect("Failed to encrypt fixture")
}

/// One-time token as delivered to the callback endpoint
///
/// # Panics
/// Panics if `receipt_token` is too long for the key
#[must_use]
pub fn encrypt_token(public_key: &RsaPublicKey, receipt_token: &str) -> String {
    URL_SAFE.encode(rsa_encrypt(public_key, receipt_token.as_bytes()))
}

/// Base64 `EncryptedData` under [`RECEIPT_KEY`]
#[must_use]
pub fn encrypt_content(plaintext: &[u8]) -> String {
    let cipher_text = Aes256CbcEnc::new(&RECEIPT_KEY.into(), &RECEIPT_IV.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    let encrypted = EncryptedData {
        iv: RECEIPT_IV.to_vec(),
        cipher_text,
    };

    STANDARD.encode(encrypted.encode_to_vec())
}

/// Profile response body carrying `attributes`
///
/// # Panics
/// Panics if the receipt key cannot be encrypted for `public_key`
#[must_use]
pub fn receipt(public_key: &RsaPublicKey, attributes: &[Attribute]) -> Value {
    let content = AttributeList {
        attributes: attributes.to_vec(),
    };

    json!({
        "receipt": {
            "receipt_id": RECEIPT_ID,
            "wrapped_receipt_key": STANDARD.encode(rsa_encrypt(public_key, &RECEIPT_KEY)),
            "other_party_profile_content": encrypt_content(&content.encode_to_vec()),
            "remember_me_id": REMEMBER_ME_ID,
            "parent_remember_me_id": PARENT_REMEMBER_ME_ID,
            "timestamp": "2024-05-01T10:00:00Z",
            "sharing_outcome": "SUCCESS",
        }
    })
}
