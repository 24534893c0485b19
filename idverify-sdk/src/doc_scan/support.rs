use serde_json::Value;

use crate::parse::{array, opt_str};

/// A document type accepted for a country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedDocument {
    document_type: Option<String>,
}

impl SupportedDocument {
    /// Document type, e.g. `PASSPORT`
    #[must_use]
    pub fn document_type(&self) -> Option<&str> {
        self.document_type.as_deref()
    }
}

impl From<&Value> for SupportedDocument {
    fn from(value: &Value) -> Self {
        Self {
            document_type: opt_str(value, "type"),
        }
    }
}

/// A country and the documents it can be verified with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedCountry {
    code: Option<String>,
    supported_documents: Vec<SupportedDocument>,
}

impl SupportedCountry {
    /// ISO 3166-1 alpha-3 code
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn supported_documents(&self) -> &[SupportedDocument] {
        &self.supported_documents
    }
}

impl From<&Value> for SupportedCountry {
    fn from(value: &Value) -> Self {
        Self {
            code: opt_str(value, "code"),
            supported_documents: array(value, "supported_documents")
                .iter()
                .map(SupportedDocument::from)
                .collect(),
        }
    }
}

/// Body of `GET /supported-documents`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedDocumentsResponse {
    supported_countries: Vec<SupportedCountry>,
}

impl SupportedDocumentsResponse {
    #[must_use]
    pub fn supported_countries(&self) -> &[SupportedCountry] {
        &self.supported_countries
    }

    /// Looks a country up by its code
    #[must_use]
    pub fn country(&self, code: &str) -> Option<&SupportedCountry> {
        self.supported_countries
            .iter()
            .find(|country| country.code() == Some(code))
    }
}

impl From<&Value> for SupportedDocumentsResponse {
    fn from(value: &Value) -> Self {
        Self {
            supported_countries: array(value, "supported_countries")
                .iter()
                .map(SupportedCountry::from)
                .collect(),
        }
    }
}
