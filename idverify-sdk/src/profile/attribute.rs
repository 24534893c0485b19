use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use prost::Message as ProstMessage;
use serde_json::Value;

use super::proto::{self, ContentType};
use crate::error::{SdkError, SdkResult};
use crate::media::Media;

/// Decoded value of a profile attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    Date(NaiveDate),
    Int(i64),
    Json(Value),
    Image(Media),
    MultiValue(Vec<AttributeValue>),
    /// Content of an undefined type, kept as is
    Bytes(Vec<u8>),
}

impl AttributeValue {
    fn decode(content_type: ContentType, data: Vec<u8>) -> SdkResult<Self> {
        Ok(match content_type {
            ContentType::String => Self::String(utf8(data)?),
            ContentType::Date => {
                let raw = utf8(data)?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|e| SdkError::InvalidValue(format!("invalid date {raw:?}: {e}")))?;
                Self::Date(date)
            }
            ContentType::Int => {
                let raw = utf8(data)?;
                let int = raw
                    .trim()
                    .parse()
                    .map_err(|e| SdkError::InvalidValue(format!("invalid integer {raw:?}: {e}")))?;
                Self::Int(int)
            }
            ContentType::Json => Self::Json(serde_json::from_slice(&data)?),
            ContentType::Jpeg => Self::Image(Media::ImageJpeg(data)),
            ContentType::Png => Self::Image(Media::ImagePng(data)),
            ContentType::MultiValue => {
                let multi = proto::MultiValue::decode(data.as_slice())?;
                let values = multi
                    .values
                    .into_iter()
                    .map(|value| {
                        let content_type = value.content_type();
                        Self::decode(content_type, value.data)
                    })
                    .collect::<SdkResult<_>>()?;
                Self::MultiValue(values)
            }
            ContentType::Undefined => Self::Bytes(data),
        })
    }

    /// The value as text, for string-typed attributes
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_image(&self) -> Option<&Media> {
        match self {
            Self::Image(media) => Some(media),
            _ => None,
        }
    }

    /// A JSON rendering, with images as `data:` URIs
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(value) => Value::from(value.as_str()),
            Self::Date(date) => Value::from(date.format("%Y-%m-%d").to_string()),
            Self::Int(int) => Value::from(*int),
            Self::Json(json) => json.clone(),
            Self::Image(media) => Value::from(media.base64_content()),
            Self::MultiValue(values) => values.iter().map(Self::to_json).collect(),
            Self::Bytes(bytes) => Value::from(STANDARD.encode(bytes)),
        }
    }
}

fn utf8(data: Vec<u8>) -> SdkResult<String> {
    String::from_utf8(data)
        .map_err(|_| SdkError::InvalidValue("attribute value is not valid UTF-8".to_string()))
}

/// A named attribute from the shared profile
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    value: AttributeValue,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// Derived attributes carry a `:` in their name, e.g. `age_over:18`
    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.name.contains(':')
    }
}

impl TryFrom<proto::Attribute> for Attribute {
    type Error = SdkError;

    fn try_from(attribute: proto::Attribute) -> SdkResult<Self> {
        let content_type = attribute.content_type();
        let value = AttributeValue::decode(content_type, attribute.value)?;

        Ok(Self::new(attribute.name, value))
    }
}
