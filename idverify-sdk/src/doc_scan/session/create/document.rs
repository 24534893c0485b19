use serde::Serialize;

use crate::error::{SdkError, SdkResult};

/// A document the user must supply during the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RequiredDocument {
    /// Any identity document accepted by the filter
    #[serde(rename = "ID_DOCUMENT")]
    IdDocument {
        /// Restricts which documents are accepted
        #[serde(skip_serializing_if = "Option::is_none")]
        filter: Option<DocumentFilter>,
    },
}

/// Whether restrictions list the accepted or the rejected documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Inclusion {
    /// Only listed documents are accepted
    Whitelist,
    /// Listed documents are rejected
    Blacklist,
}

/// Filter on acceptable documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum DocumentFilter {
    /// Country and document type restrictions
    #[serde(rename = "DOCUMENT_RESTRICTIONS")]
    DocumentRestrictions {
        /// Accept or reject the listed documents
        inclusion: Inclusion,
        /// Listed documents
        documents: Vec<DocumentRestriction>,
    },
}

/// One entry of a [`DocumentFilter::DocumentRestrictions`] list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentRestriction {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    country_codes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    document_types: Vec<String>,
}

impl DocumentRestriction {
    /// Restriction on the given ISO 3166-1 alpha-3 countries and document types
    #[must_use]
    pub fn new(country_codes: Vec<String>, document_types: Vec<String>) -> Self {
        Self {
            country_codes,
            document_types,
        }
    }
}

/// Builds a [`DocumentFilter::DocumentRestrictions`]
#[derive(Debug, Clone, Default)]
pub struct DocumentRestrictionsFilterBuilder {
    inclusion: Option<Inclusion>,
    documents: Vec<DocumentRestriction>,
}

impl DocumentRestrictionsFilterBuilder {
    /// Creates the builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept only the listed documents
    #[must_use]
    pub fn for_whitelist(mut self) -> Self {
        self.inclusion = Some(Inclusion::Whitelist);
        self
    }

    /// Reject the listed documents
    #[must_use]
    pub fn for_blacklist(mut self) -> Self {
        self.inclusion = Some(Inclusion::Blacklist);
        self
    }

    /// Adds a restriction
    #[must_use]
    pub fn with_document_restriction(mut self, restriction: DocumentRestriction) -> Self {
        self.documents.push(restriction);
        self
    }

    /// Builds the filter
    ///
    /// # Errors
    /// Returns `SdkError::MissingField` if neither whitelist nor blacklist was chosen
    pub fn build(self) -> SdkResult<DocumentFilter> {
        let inclusion = self.inclusion.ok_or(SdkError::MissingField("inclusion"))?;

        Ok(DocumentFilter::DocumentRestrictions {
            inclusion,
            documents: self.documents,
        })
    }
}

/// Builds a [`RequiredDocument::IdDocument`]
#[derive(Debug, Clone, Default)]
pub struct RequiredIdDocumentBuilder {
    filter: Option<DocumentFilter>,
}

impl RequiredIdDocumentBuilder {
    /// Creates the builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts acceptable documents
    #[must_use]
    pub fn with_filter(mut self, filter: DocumentFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Builds the requirement
    #[must_use]
    pub fn build(self) -> RequiredDocument {
        RequiredDocument::IdDocument {
            filter: self.filter,
        }
    }
}
