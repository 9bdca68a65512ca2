//! Shared Profile model.
//!
//! # Responsibility
//! - Define the identity/contact/education record common to all roles.
//!
//! # Invariants
//! - Exactly one profile exists per application state.
//! - Missing fields in persisted data deserialize as empty values.

use super::{assign, null_as_default, FieldParseError};
use serde::{Deserialize, Serialize};

/// Identity, contact details and education history shared by every role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SharedProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
}

/// One education history row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    /// Free text such as `Sep 2024 - Feb 2025`.
    #[serde(deserialize_with = "null_as_default")]
    pub date_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
}

/// Partial update for the Shared Profile. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub education: Option<Vec<EducationEntry>>,
}

/// Editable scalar fields of [`SharedProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Github,
    Linkedin,
}

/// Editable fields of [`EducationEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    DateRange,
    Details,
}

const PROFILE_FIELDS: &[&str] = &["name", "email", "phone", "github", "linkedin"];
const EDUCATION_FIELDS: &[&str] = &["school", "degree", "date-range", "details"];

impl ProfileField {
    pub fn parse(value: &str) -> Result<Self, FieldParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "github" => Ok(Self::Github),
            "linkedin" => Ok(Self::Linkedin),
            _ => Err(FieldParseError {
                kind: "profile",
                value: value.to_string(),
                expected: PROFILE_FIELDS,
            }),
        }
    }
}

impl EducationField {
    pub fn parse(value: &str) -> Result<Self, FieldParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "school" => Ok(Self::School),
            "degree" => Ok(Self::Degree),
            "date-range" | "date_range" | "daterange" => Ok(Self::DateRange),
            "details" => Ok(Self::Details),
            _ => Err(FieldParseError {
                kind: "education",
                value: value.to_string(),
                expected: EDUCATION_FIELDS,
            }),
        }
    }
}

impl SharedProfile {
    /// Returns the current value of one scalar field.
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Github => &self.github,
            ProfileField::Linkedin => &self.linkedin,
        }
    }

    /// Shallow-merges `update`. Returns `true` if anything changed.
    pub fn apply(&mut self, update: SharedProfileUpdate) -> bool {
        let scalars = [
            (ProfileField::Name, update.name),
            (ProfileField::Email, update.email),
            (ProfileField::Phone, update.phone),
            (ProfileField::Github, update.github),
            (ProfileField::Linkedin, update.linkedin),
        ];
        let mut changed = false;
        for (field, value) in scalars {
            if let Some(value) = value {
                changed |= self.set_field(field, value);
            }
        }
        if let Some(education) = update.education {
            if self.education != education {
                self.education = education;
                changed = true;
            }
        }
        changed
    }

    /// Sets one scalar field. Returns `false` when the value is unchanged.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Github => &mut self.github,
            ProfileField::Linkedin => &mut self.linkedin,
        };
        assign(slot, value.into())
    }
}

impl EducationEntry {
    /// Placeholder row appended by "add education".
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            school: "University Name".to_string(),
            degree: "Degree".to_string(),
            date_range: "Month Year - Month Year".to_string(),
            details: "Grades or details".to_string(),
        }
    }

    pub fn field(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::DateRange => &self.date_range,
            EducationField::Details => &self.details,
        }
    }

    /// Sets one field. Returns `false` when the value is unchanged.
    pub fn set_field(&mut self, field: EducationField, value: impl Into<String>) -> bool {
        let slot = match field {
            EducationField::School => &mut self.school,
            EducationField::Degree => &mut self.degree,
            EducationField::DateRange => &mut self.date_range,
            EducationField::Details => &mut self.details,
        };
        assign(slot, value.into())
    }
}
