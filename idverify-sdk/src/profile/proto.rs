//! Protobuf messages carried inside a share receipt

/// How an attribute value is encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ContentType {
    Undefined = 0,
    String = 1,
    Jpeg = 2,
    Date = 3,
    Png = 4,
    Json = 5,
    MultiValue = 6,
    Int = 7,
}

/// AES-256-CBC ciphertext together with its IV
#[derive(Clone, PartialEq, prost::Message)]
pub struct EncryptedData {
    #[prost(bytes = "vec", tag = "1")]
    pub iv: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub cipher_text: Vec<u8>,
}

/// Decrypted profile content
#[derive(Clone, PartialEq, prost::Message)]
pub struct AttributeList {
    #[prost(message, repeated, tag = "1")]
    pub attributes: Vec<Attribute>,
}

/// One shared attribute. Anchors (tag 4) are not decoded.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
    #[prost(enumeration = "ContentType", tag = "3")]
    pub content_type: i32,
}

/// Value of a `MULTI_VALUE` attribute
#[derive(Clone, PartialEq, prost::Message)]
pub struct MultiValue {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<multi_value::Value>,
}

pub mod multi_value {
    use super::ContentType;

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Value {
        #[prost(bytes = "vec", tag = "1")]
        pub data: Vec<u8>,
        #[prost(enumeration = "ContentType", tag = "2")]
        pub content_type: i32,
    }
}
