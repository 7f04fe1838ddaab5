//! Contact form validation and normalization.
//!
//! A submission is accepted only when name, email and phone are all present
//! and non-empty after trimming. Accepted values are trimmed and the email is
//! lowercased before anything is stored.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Returned when any of the three fields is missing or blank.
pub const MSG_MISSING_FIELDS: &str = "Please provide all required fields: name, email, and phone";

/// Returned when the fields are present but fail validation.
pub const MSG_INVALID_DATA: &str = "Invalid data provided";

/// Raw contact form body. Every field is optional at this stage so a missing
/// field yields a validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A normalized contact, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewContact {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 320))]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub phone: String,
}

impl ContactSubmission {
    /// Check required fields, then trim and lowercase into a [`NewContact`].
    pub fn normalize(&self) -> Result<NewContact, CoreError> {
        let (Some(name), Some(email), Some(phone)) = (
            required(self.name.as_deref()),
            required(self.email.as_deref()),
            required(self.phone.as_deref()),
        ) else {
            return Err(CoreError::Validation(MSG_MISSING_FIELDS.to_string()));
        };

        let contact = NewContact {
            name: name.to_string(),
            email: email.to_lowercase(),
            phone: phone.to_string(),
        };
        contact
            .validate()
            .map_err(|_| CoreError::Validation(MSG_INVALID_DATA.to_string()))?;
        Ok(contact)
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
