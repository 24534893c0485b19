use std::collections::BTreeSet;

use serde::Serialize;

use super::attribute::WantedAttribute;
use super::constants::{
    AGE_OVER, AGE_UNDER, ATTR_DATE_OF_BIRTH, ATTR_DOCUMENT_DETAILS, ATTR_DOCUMENT_IMAGES,
    ATTR_EMAIL_ADDRESS, ATTR_FAMILY_NAME, ATTR_FULL_NAME, ATTR_GENDER, ATTR_GIVEN_NAMES,
    ATTR_NATIONALITY, ATTR_PHONE_NUMBER, ATTR_POSTAL_ADDRESS, ATTR_SELFIE,
    ATTR_STRUCTURED_POSTAL_ADDRESS, PIN_AUTH_TYPE, SELFIE_AUTH_TYPE,
};

/// What a share asks the user for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DynamicPolicy {
    wanted: Vec<WantedAttribute>,
    wanted_auth_types: BTreeSet<u32>,
    wanted_remember_me: bool,
    wanted_remember_me_optional: bool,
}

impl DynamicPolicy {
    /// Requested attributes, in the order they were first added
    #[must_use]
    pub fn wanted_attributes(&self) -> &[WantedAttribute] {
        &self.wanted
    }

    /// Enabled authentication types, e.g. [`SELFIE_AUTH_TYPE`](super::constants::SELFIE_AUTH_TYPE)
    #[must_use]
    pub const fn wanted_auth_types(&self) -> &BTreeSet<u32> {
        &self.wanted_auth_types
    }

    /// Whether the remember-me id is requested
    #[must_use]
    pub const fn wanted_remember_me(&self) -> bool {
        self.wanted_remember_me
    }
}

/// Builds a [`DynamicPolicy`].
///
/// Attributes are keyed on name plus derivation: adding `date_of_birth`
/// twice keeps one entry, while `date_of_birth` and `date_of_birth` with
/// `age_over:18` are distinct.
#[derive(Debug, Clone, Default)]
pub struct DynamicPolicyBuilder {
    wanted: Vec<WantedAttribute>,
    wanted_auth_types: BTreeSet<u32>,
    wanted_remember_me: bool,
}

impl DynamicPolicyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing any earlier one with the same name and derivation
    #[must_use]
    pub fn with_wanted_attribute(mut self, attribute: WantedAttribute) -> Self {
        let existing = self.wanted.iter_mut().find(|wanted| {
            wanted.name() == attribute.name() && wanted.derivation() == attribute.derivation()
        });

        match existing {
            Some(slot) => *slot = attribute,
            None => self.wanted.push(attribute),
        }
        self
    }

    /// Adds an attribute by name, with no derivation or constraints
    #[must_use]
    pub fn with_wanted_attribute_by_name(self, name: &str) -> Self {
        self.with_wanted_attribute(WantedAttribute::named(name, None))
    }

    #[must_use]
    pub fn with_family_name(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_FAMILY_NAME)
    }

    #[must_use]
    pub fn with_given_names(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_GIVEN_NAMES)
    }

    #[must_use]
    pub fn with_full_name(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_FULL_NAME)
    }

    #[must_use]
    pub fn with_date_of_birth(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_DATE_OF_BIRTH)
    }

    /// Requests `date_of_birth` derived by `derivation`, e.g. `age_over:18`
    #[must_use]
    pub fn with_age_derived_attribute(self, derivation: &str) -> Self {
        self.with_wanted_attribute(WantedAttribute::named(
            ATTR_DATE_OF_BIRTH,
            Some(derivation.to_string()),
        ))
    }

    /// Requests an `age_over:<age>` check on `date_of_birth`
    #[must_use]
    pub fn with_age_over(self, age: u32) -> Self {
        self.with_age_derived_attribute(&format!("{AGE_OVER}{age}"))
    }

    /// Requests an `age_under:<age>` check on `date_of_birth`
    #[must_use]
    pub fn with_age_under(self, age: u32) -> Self {
        self.with_age_derived_attribute(&format!("{AGE_UNDER}{age}"))
    }

    #[must_use]
    pub fn with_gender(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_GENDER)
    }

    #[must_use]
    pub fn with_postal_address(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_POSTAL_ADDRESS)
    }

    #[must_use]
    pub fn with_structured_postal_address(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_STRUCTURED_POSTAL_ADDRESS)
    }

    #[must_use]
    pub fn with_nationality(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_NATIONALITY)
    }

    #[must_use]
    pub fn with_phone_number(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_PHONE_NUMBER)
    }

    #[must_use]
    pub fn with_selfie(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_SELFIE)
    }

    #[must_use]
    pub fn with_email(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_EMAIL_ADDRESS)
    }

    #[must_use]
    pub fn with_document_details(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_DOCUMENT_DETAILS)
    }

    #[must_use]
    pub fn with_document_images(self) -> Self {
        self.with_wanted_attribute_by_name(ATTR_DOCUMENT_IMAGES)
    }

    /// Turns an authentication type on or off
    #[must_use]
    pub fn with_wanted_auth_type(mut self, auth_type: u32, enabled: bool) -> Self {
        if enabled {
            self.wanted_auth_types.insert(auth_type);
        } else {
            self.wanted_auth_types.remove(&auth_type);
        }
        self
    }

    /// Require a selfie to authenticate the share
    #[must_use]
    pub fn with_selfie_auth(self, enabled: bool) -> Self {
        self.with_wanted_auth_type(SELFIE_AUTH_TYPE, enabled)
    }

    /// Require the user's PIN to authenticate the share
    #[must_use]
    pub fn with_pin_auth(self, enabled: bool) -> Self {
        self.with_wanted_auth_type(PIN_AUTH_TYPE, enabled)
    }

    /// Ask for the user's remember-me id
    #[must_use]
    pub const fn with_wanted_remember_me(mut self, wanted: bool) -> Self {
        self.wanted_remember_me = wanted;
        self
    }

    /// Finishes the policy; an empty policy is valid
    #[must_use]
    pub fn build(self) -> DynamicPolicy {
        DynamicPolicy {
            wanted: self.wanted,
            wanted_auth_types: self.wanted_auth_types,
            wanted_remember_me: self.wanted_remember_me,
            wanted_remember_me_optional: false,
        }
    }
}
