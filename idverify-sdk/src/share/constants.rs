//! Attribute names and policy constants of the sharing API

pub const ATTR_FAMILY_NAME: &str = "family_name";
pub const ATTR_GIVEN_NAMES: &str = "given_names";
pub const ATTR_FULL_NAME: &str = "full_name";
pub const ATTR_DATE_OF_BIRTH: &str = "date_of_birth";
pub const ATTR_GENDER: &str = "gender";
pub const ATTR_POSTAL_ADDRESS: &str = "postal_address";
pub const ATTR_STRUCTURED_POSTAL_ADDRESS: &str = "structured_postal_address";
pub const ATTR_NATIONALITY: &str = "nationality";
pub const ATTR_PHONE_NUMBER: &str = "phone_number";
pub const ATTR_SELFIE: &str = "selfie";
pub const ATTR_EMAIL_ADDRESS: &str = "email_address";
pub const ATTR_DOCUMENT_DETAILS: &str = "document_details";
pub const ATTR_DOCUMENT_IMAGES: &str = "document_images";

pub const AGE_OVER: &str = "age_over:";
pub const AGE_UNDER: &str = "age_under:";

pub const SELFIE_AUTH_TYPE: u32 = 1;
pub const PIN_AUTH_TYPE: u32 = 2;

pub const ANCHOR_PASSPORT: &str = "PASSPORT";
pub const ANCHOR_DRIVING_LICENCE: &str = "DRIVING_LICENCE";
pub const ANCHOR_NATIONAL_ID: &str = "NATIONAL_ID";
pub const ANCHOR_PASSCARD: &str = "PASS_CARD";

pub const LOCATION_CONSTRAINT: &str = "LOCATION_CONSTRAINT";
pub const TRANSACTIONAL_FLOW: &str = "TRANSACTIONAL_FLOW";
