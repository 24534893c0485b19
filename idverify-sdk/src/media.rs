//! Binary media returned by the API.
//!
//! The concrete variant is picked from the response's `content-type` by
//! [`classify`], which only looks at the normalized essence of the header.

use base64::{engine::general_purpose::STANDARD, Engine};
use http::header::CONTENT_TYPE;

use crate::error::{SdkError, SdkResult};
use crate::request::response::{Response, ResponseBody};

/// Kind of media, derived from the content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Any content type without a dedicated variant
    Generic,
    /// `image/jpeg`
    ImageJpeg,
    /// `image/png`
    ImagePng,
}

/// Lowercases a content type and drops any parameters (`; charset=...`)
#[must_use]
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Maps a content type onto a [`MediaKind`]
#[must_use]
pub fn classify(content_type: &str) -> MediaKind {
    let essence = normalize_mime_type(content_type);

    if essence == mime::IMAGE_JPEG.essence_str() {
        MediaKind::ImageJpeg
    } else if essence == mime::IMAGE_PNG.essence_str() {
        MediaKind::ImagePng
    } else {
        MediaKind::Generic
    }
}

/// Media content together with its type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// Content of any other type
    Generic {
        /// Normalized content type
        mime_type: String,
        /// Raw bytes
        content: Vec<u8>,
    },
    /// JPEG image bytes
    ImageJpeg(Vec<u8>),
    /// PNG image bytes
    ImagePng(Vec<u8>),
}

impl Media {
    /// Wraps `content` in the variant matching `mime_type`
    #[must_use]
    pub fn new(mime_type: &str, content: Vec<u8>) -> Self {
        match classify(mime_type) {
            MediaKind::ImageJpeg => Self::ImageJpeg(content),
            MediaKind::ImagePng => Self::ImagePng(content),
            MediaKind::Generic => Self::Generic {
                mime_type: normalize_mime_type(mime_type),
                content,
            },
        }
    }

    /// Builds media from a response's `content-type` header and body
    ///
    /// # Errors
    /// Returns a schema error if the response has no readable `content-type`
    pub fn from_response(response: &Response) -> SdkResult<Self> {
        let content_type = response
            .header(CONTENT_TYPE.as_str())
            .ok_or_else(|| SdkError::Schema("mimeType must be a string".to_string()))?;

        let content = match response.body() {
            ResponseBody::Bytes(bytes) => bytes.clone(),
            ResponseBody::Json(json) => json.to_string().into_bytes(),
            ResponseBody::Empty => Vec::new(),
        };

        Ok(Self::new(content_type, content))
    }

    /// Kind of this media
    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        match self {
            Self::Generic { .. } => MediaKind::Generic,
            Self::ImageJpeg(_) => MediaKind::ImageJpeg,
            Self::ImagePng(_) => MediaKind::ImagePng,
        }
    }

    /// Whether this media is an image
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::ImageJpeg(_) | Self::ImagePng(_))
    }

    /// Normalized content type
    #[must_use]
    pub fn mime_type(&self) -> &str {
        match self {
            Self::Generic { mime_type, .. } => mime_type,
            Self::ImageJpeg(_) => mime::IMAGE_JPEG.essence_str(),
            Self::ImagePng(_) => mime::IMAGE_PNG.essence_str(),
        }
    }

    /// Raw bytes
    #[must_use]
    pub fn content(&self) -> &[u8] {
        match self {
            Self::Generic { content, .. } | Self::ImageJpeg(content) | Self::ImagePng(content) => {
                content
            }
        }
    }

    /// Content as standard base64
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.content())
    }

    /// Content as a `data:` URI, e.g. for an `<img src>`
    #[must_use]
    pub fn base64_content(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }

    /// File extension conventionally used for this media
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::ImageJpeg(_) => "jpeg",
            Self::ImagePng(_) => "png",
            Self::Generic { .. } => "bin",
        }
    }
}
