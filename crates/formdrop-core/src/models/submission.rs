//! Form submission model and required-field validation.

use std::collections::HashMap;

use crate::error::AppError;

/// The five canonical form fields, in CSV column order.
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "email", "contact", "branch", "position"];

/// A validated form submission. All fields are opaque strings; the only
/// validation performed is non-empty presence after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub branch: String,
    pub position: String,
}

impl Submission {
    /// Build a `Submission` from a raw field map as received from form data.
    ///
    /// Extraneous keys are ignored. A field counts as present only if its
    /// trimmed value is non-empty. On failure returns
    /// `AppError::MissingFields` naming every missing field; no partial data
    /// is retained.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|name| {
                fields
                    .get(**name)
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        Ok(Submission {
            name: fields["name"].clone(),
            email: fields["email"].clone(),
            contact: fields["contact"].clone(),
            branch: fields["branch"].clone(),
            position: fields["position"].clone(),
        })
    }
}
