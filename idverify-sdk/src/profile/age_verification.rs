use super::attribute::Attribute;
use crate::error::{SdkError, SdkResult};
use crate::share::constants::{AGE_OVER, AGE_UNDER};

/// Direction of an age check
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum AgeCheck {
    #[strum(serialize = "age_over")]
    Over,
    #[strum(serialize = "age_under")]
    Under,
}

/// Outcome of an `age_over:N` or `age_under:N` derivation
#[derive(Debug, Clone, PartialEq)]
pub struct AgeVerification {
    check: AgeCheck,
    age: u32,
    passed: bool,
    attribute: Attribute,
}

impl AgeVerification {
    #[must_use]
    pub const fn check(&self) -> AgeCheck {
        self.check
    }

    /// Threshold the check was made against
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Whether the user satisfies the check
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// The derived attribute this verification was read from
    #[must_use]
    pub const fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    /// Whether an attribute name is an age derivation
    #[must_use]
    pub fn is_age_verification(name: &str) -> bool {
        name.starts_with(AGE_OVER) || name.starts_with(AGE_UNDER)
    }
}

impl TryFrom<&Attribute> for AgeVerification {
    type Error = SdkError;

    fn try_from(attribute: &Attribute) -> SdkResult<Self> {
        let name = attribute.name();
        let (check, age) = if let Some(age) = name.strip_prefix(AGE_OVER) {
            (AgeCheck::Over, age)
        } else if let Some(age) = name.strip_prefix(AGE_UNDER) {
            (AgeCheck::Under, age)
        } else {
            return Err(SdkError::InvalidValue(format!(
                "{name} is not an age verification"
            )));
        };

        let age = age
            .parse()
            .map_err(|_| SdkError::InvalidValue(format!("{name} has no valid age")))?;
        let passed = match attribute.value().as_str() {
            Some("true") => true,
            Some("false") => false,
            _ => {
                return Err(SdkError::InvalidValue(format!(
                    "{name} must be \"true\" or \"false\""
                )))
            }
        };

        Ok(Self {
            check,
            age,
            passed,
            attribute: attribute.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::attribute::AttributeValue;

    fn derived(name: &str, value: &str) -> Attribute {
        Attribute::new(name, AttributeValue::String(value.to_string()))
    }

    #[test]
    fn test_parses_over_and_under() {
        let over = AgeVerification::try_from(&derived("age_over:18", "true")).unwrap();
        assert_eq!(over.check(), AgeCheck::Over);
        assert_eq!(over.age(), 18);
        assert!(over.passed());
        assert_eq!(over.check().to_string(), "age_over");

        let under = AgeVerification::try_from(&derived("age_under:21", "false")).unwrap();
        assert_eq!(under.check(), AgeCheck::Under);
        assert_eq!(under.age(), 21);
        assert!(!under.passed());
    }

    #[test]
    fn test_rejects_malformed_derivations() {
        for (name, value) in [
            ("full_name", "true"),
            ("age_over:", "true"),
            ("age_over:eighteen", "true"),
            ("age_over:18", "yes"),
        ] {
            assert!(
                AgeVerification::try_from(&derived(name, value)).is_err(),
                "{name}={value}"
            );
        }
    }
}
