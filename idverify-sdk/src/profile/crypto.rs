//! Unwrapping of share tokens and receipt content

use aes::Aes256;
use base64::{
    alphabet,
    engine::{general_purpose::STANDARD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use prost::Message as ProstMessage;

use super::proto::EncryptedData;
use crate::error::{SdkError, SdkResult};
use crate::request::signer::RequestSigner;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Tokens arrive URL-safe encoded, with or without padding
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Recovers the receipt token from the one-time token sent to the callback
pub(crate) fn decrypt_token(signer: &RequestSigner, token: &str) -> SdkResult<String> {
    let encrypted = TOKEN_ENGINE
        .decode(token.trim())
        .map_err(|e| SdkError::Decryption(format!("token is not valid base64: {e}")))?;
    let decrypted = signer.decrypt(&encrypted)?;

    String::from_utf8(decrypted)
        .map_err(|_| SdkError::Decryption("token is not valid UTF-8".to_string()))
}

/// Recovers the AES key that protects the receipt content
pub(crate) fn unwrap_receipt_key(signer: &RequestSigner, wrapped_key: &str) -> SdkResult<Vec<u8>> {
    let wrapped = STANDARD
        .decode(wrapped_key)
        .map_err(|e| SdkError::Decryption(format!("wrapped_receipt_key is not valid base64: {e}")))?;

    signer.decrypt(&wrapped)
}

/// Decrypts base64 `EncryptedData` with the receipt key
pub(crate) fn decrypt_content(receipt_key: &[u8], content: &str) -> SdkResult<Vec<u8>> {
    let bytes = STANDARD
        .decode(content)
        .map_err(|e| SdkError::Decryption(format!("profile content is not valid base64: {e}")))?;
    let encrypted = EncryptedData::decode(bytes.as_slice())?;

    Aes256CbcDec::new_from_slices(receipt_key, &encrypted.iv)
        .map_err(|_| SdkError::Decryption("receipt key or IV has the wrong length".to_string()))?
        .decrypt_padded_vec_mut::<Pkcs7>(&encrypted.cipher_text)
        .map_err(|_| SdkError::Decryption("profile content has invalid padding".to_string()))
}
