use serde::Serialize;

use super::constants::{
    ANCHOR_DRIVING_LICENCE, ANCHOR_NATIONAL_ID, ANCHOR_PASSCARD, ANCHOR_PASSPORT,
};
use crate::error::{SdkError, SdkResult};

/// A document type the user may prove an attribute with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WantedAnchor {
    name: String,
    sub_type: String,
}

impl WantedAnchor {
    #[must_use]
    pub fn new(name: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub_type: sub_type.into(),
        }
    }
}

/// Anchors accepted as the source of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferredSources {
    anchors: Vec<WantedAnchor>,
    soft_preference: bool,
}

/// Restriction on how an attribute may be satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Constraint {
    /// Only accept the attribute from the listed sources
    #[serde(rename = "SOURCE")]
    Source { preferred_sources: PreferredSources },
}

/// Builds a [`Constraint::Source`]
#[derive(Debug, Clone, Default)]
pub struct SourceConstraintBuilder {
    anchors: Vec<WantedAnchor>,
    soft_preference: bool,
}

impl SourceConstraintBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: WantedAnchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    /// Accepts a passport of the given sub-type (empty for any)
    #[must_use]
    pub fn with_passport(self, sub_type: impl Into<String>) -> Self {
        self.with_anchor(WantedAnchor::new(ANCHOR_PASSPORT, sub_type))
    }

    /// Accepts a driving licence of the given sub-type (empty for any)
    #[must_use]
    pub fn with_driving_licence(self, sub_type: impl Into<String>) -> Self {
        self.with_anchor(WantedAnchor::new(ANCHOR_DRIVING_LICENCE, sub_type))
    }

    #[must_use]
    pub fn with_national_id(self, sub_type: impl Into<String>) -> Self {
        self.with_anchor(WantedAnchor::new(ANCHOR_NATIONAL_ID, sub_type))
    }

    #[must_use]
    pub fn with_passcard(self, sub_type: impl Into<String>) -> Self {
        self.with_anchor(WantedAnchor::new(ANCHOR_PASSCARD, sub_type))
    }

    /// Let the user fall back to other sources when none of the anchors fit
    #[must_use]
    pub const fn with_soft_preference(mut self, soft_preference: bool) -> Self {
        self.soft_preference = soft_preference;
        self
    }

    /// Finishes a `SOURCE` constraint over the collected anchors
    #[must_use]
    pub fn build(self) -> Constraint {
        Constraint::Source {
            preferred_sources: PreferredSources {
                anchors: self.anchors,
                soft_preference: self.soft_preference,
            },
        }
    }
}

/// An attribute requested from the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WantedAttribute {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    derivation: Option<String>,
    optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    accept_self_asserted: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    constraints: Vec<Constraint>,
}

impl WantedAttribute {
    pub(crate) fn named(name: &str, derivation: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            derivation,
            optional: false,
            accept_self_asserted: None,
            constraints: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derivation applied to the attribute, e.g. `age_over:18`
    #[must_use]
    pub fn derivation(&self) -> Option<&str> {
        self.derivation.as_deref()
    }

    #[must_use]
    pub const fn accept_self_asserted(&self) -> Option<bool> {
        self.accept_self_asserted
    }

    /// Constraints in the order they were added
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// Builds a [`WantedAttribute`]
#[derive(Debug, Clone, Default)]
pub struct WantedAttributeBuilder {
    name: Option<String>,
    derivation: Option<String>,
    accept_self_asserted: Option<bool>,
    constraints: Vec<Constraint>,
}

impl WantedAttributeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute name, e.g. `given_names`
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Derivation applied before sharing, e.g. `age_over:18`
    #[must_use]
    pub fn with_derivation(mut self, derivation: impl Into<String>) -> Self {
        self.derivation = Some(derivation.into());
        self
    }

    /// Whether a value the user typed in is acceptable
    #[must_use]
    pub const fn with_accept_self_asserted(mut self, accept: bool) -> Self {
        self.accept_self_asserted = Some(accept);
        self
    }

    /// Appends a constraint
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Replaces all constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = constraints;
        self
    }

    /// # Errors
    /// Returns `SdkError::MissingField` if no name was set
    pub fn build(self) -> SdkResult<WantedAttribute> {
        let name = self.name.ok_or(SdkError::MissingField("name"))?;

        Ok(WantedAttribute {
            name,
            derivation: self.derivation,
            optional: false,
            accept_self_asserted: self.accept_self_asserted,
            constraints: self.constraints,
        })
    }
}
