//! Profiles shared through a completed share.
//!
//! The callback receives a one-time token encrypted for the application key.
//! Exchanging it with [`crate::ShareClient::get_activity_details`] yields a
//! receipt whose profile content is AES-256-CBC encrypted under a key that is
//! itself wrapped with the application key. [`ActivityDetails`] unwraps both
//! layers and decodes the attribute list.

pub mod activity;
pub mod age_verification;
pub mod attribute;
pub(crate) mod crypto;
pub mod proto;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

pub use activity::ActivityDetails;
pub use age_verification::{AgeCheck, AgeVerification};
pub use attribute::{Attribute, AttributeValue};

use crate::share::constants::{
    ATTR_DATE_OF_BIRTH, ATTR_DOCUMENT_DETAILS, ATTR_DOCUMENT_IMAGES, ATTR_EMAIL_ADDRESS,
    ATTR_FAMILY_NAME, ATTR_FULL_NAME, ATTR_GENDER, ATTR_GIVEN_NAMES, ATTR_NATIONALITY,
    ATTR_PHONE_NUMBER, ATTR_POSTAL_ADDRESS, ATTR_SELFIE, ATTR_STRUCTURED_POSTAL_ADDRESS,
};

/// Attributes the user shared, in the order they were received
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    attributes: Vec<Attribute>,
}

impl Profile {
    #[must_use]
    pub const fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// First attribute with exactly this name
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name() == name)
    }

    #[must_use]
    pub fn given_names(&self) -> Option<&Attribute> {
        self.attribute(ATTR_GIVEN_NAMES)
    }

    #[must_use]
    pub fn family_name(&self) -> Option<&Attribute> {
        self.attribute(ATTR_FAMILY_NAME)
    }

    #[must_use]
    pub fn full_name(&self) -> Option<&Attribute> {
        self.attribute(ATTR_FULL_NAME)
    }

    #[must_use]
    pub fn date_of_birth(&self) -> Option<&Attribute> {
        self.attribute(ATTR_DATE_OF_BIRTH)
    }

    #[must_use]
    pub fn gender(&self) -> Option<&Attribute> {
        self.attribute(ATTR_GENDER)
    }

    #[must_use]
    pub fn nationality(&self) -> Option<&Attribute> {
        self.attribute(ATTR_NATIONALITY)
    }

    #[must_use]
    pub fn phone_number(&self) -> Option<&Attribute> {
        self.attribute(ATTR_PHONE_NUMBER)
    }

    #[must_use]
    pub fn email_address(&self) -> Option<&Attribute> {
        self.attribute(ATTR_EMAIL_ADDRESS)
    }

    #[must_use]
    pub fn postal_address(&self) -> Option<&Attribute> {
        self.attribute(ATTR_POSTAL_ADDRESS)
    }

    #[must_use]
    pub fn structured_postal_address(&self) -> Option<&Attribute> {
        self.attribute(ATTR_STRUCTURED_POSTAL_ADDRESS)
    }

    #[must_use]
    pub fn document_details(&self) -> Option<&Attribute> {
        self.attribute(ATTR_DOCUMENT_DETAILS)
    }

    #[must_use]
    pub fn document_images(&self) -> Option<&Attribute> {
        self.attribute(ATTR_DOCUMENT_IMAGES)
    }

    /// The selfie image; a selfie of any other content type is ignored
    #[must_use]
    pub fn selfie(&self) -> Option<&Attribute> {
        self.attribute(ATTR_SELFIE)
            .filter(|selfie| selfie.value().as_image().is_some())
    }

    /// Every well-formed `age_over:N` and `age_under:N` attribute
    #[must_use]
    pub fn age_verifications(&self) -> Vec<AgeVerification> {
        self.attributes
            .iter()
            .filter(|attribute| AgeVerification::is_age_verification(attribute.name()))
            .filter_map(|attribute| AgeVerification::try_from(attribute).ok())
            .collect()
    }

    #[must_use]
    pub fn find_age_over_verification(&self, age: u32) -> Option<AgeVerification> {
        self.find_age_verification(AgeCheck::Over, age)
    }

    #[must_use]
    pub fn find_age_under_verification(&self, age: u32) -> Option<AgeVerification> {
        self.find_age_verification(AgeCheck::Under, age)
    }

    fn find_age_verification(&self, check: AgeCheck, age: u32) -> Option<AgeVerification> {
        self.age_verifications()
            .into_iter()
            .find(|verification| verification.check() == check && verification.age() == age)
    }
}
