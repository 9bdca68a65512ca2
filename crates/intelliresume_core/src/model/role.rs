//! Role Variant model.
//!
//! # Responsibility
//! - Define one tailored resume content-set and its list items.
//! - Provide partial-update merge and structural duplication.
//!
//! # Invariants
//! - `id` and `role_name` never change through [`RoleUpdate`].
//! - Duplicates share no list storage with their source.

use super::{assign, null_as_default, FieldParseError};
use serde::{Deserialize, Serialize};

/// Stable role identifier, unique across the role collection.
pub type RoleId = String;

/// Name given to the role synthesized when the collection is empty.
pub const PLACEHOLDER_ROLE_NAME: &str = "First Role";
/// Summary given to the role synthesized when the collection is empty.
pub const PLACEHOLDER_ROLE_SUMMARY: &str = "New summary...";

/// One selectable resume variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleVariant {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RoleId,
    #[serde(deserialize_with = "null_as_default")]
    pub role_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hobbies: String,
}

/// Labelled group of skills; `list` stays one comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub list: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Comma-separated, never parsed.
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: String,
}

/// Partial update for the active role. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleUpdate {
    pub summary: Option<String>,
    pub skills: Option<Vec<SkillCategory>>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<String>>,
    pub hobbies: Option<String>,
}

/// Free-text scalar fields of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTextField {
    Summary,
    Hobbies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Category,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    Technologies,
}

impl RoleTextField {
    pub fn parse(value: &str) -> Result<Self, FieldParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "hobbies" => Ok(Self::Hobbies),
            _ => Err(FieldParseError {
                kind: "role",
                value: value.to_string(),
                expected: &["summary", "hobbies"],
            }),
        }
    }
}

impl SkillField {
    pub fn parse(value: &str) -> Result<Self, FieldParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "list" => Ok(Self::List),
            _ => Err(FieldParseError {
                kind: "skill",
                value: value.to_string(),
                expected: &["category", "list"],
            }),
        }
    }
}

impl ProjectField {
    pub fn parse(value: &str) -> Result<Self, FieldParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "technologies" => Ok(Self::Technologies),
            _ => Err(FieldParseError {
                kind: "project",
                value: value.to_string(),
                expected: &["name", "description", "technologies"],
            }),
        }
    }
}

impl RoleVariant {
    /// Creates a role with empty content.
    pub fn blank(id: impl Into<RoleId>, role_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role_name: role_name.into(),
            ..Self::default()
        }
    }

    /// Role synthesized when no roles exist at display time.
    pub fn placeholder(id: impl Into<RoleId>) -> Self {
        Self {
            summary: PLACEHOLDER_ROLE_SUMMARY.to_string(),
            ..Self::blank(id, PLACEHOLDER_ROLE_NAME)
        }
    }

    /// Clones all content under a new identity.
    pub fn duplicate_as(&self, id: impl Into<RoleId>, role_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role_name: role_name.into(),
            ..self.clone()
        }
    }

    /// Shallow-merges `update` into this role. Returns `true` if anything changed.
    pub fn apply(&mut self, update: RoleUpdate) -> bool {
        let mut changed = false;
        if let Some(summary) = update.summary {
            changed |= assign(&mut self.summary, summary);
        }
        if let Some(hobbies) = update.hobbies {
            changed |= assign(&mut self.hobbies, hobbies);
        }
        if let Some(skills) = update.skills {
            changed |= replace_list(&mut self.skills, skills);
        }
        if let Some(projects) = update.projects {
            changed |= replace_list(&mut self.projects, projects);
        }
        if let Some(certifications) = update.certifications {
            changed |= replace_list(&mut self.certifications, certifications);
        }
        changed
    }

    pub fn text(&self, field: RoleTextField) -> &str {
        match field {
            RoleTextField::Summary => &self.summary,
            RoleTextField::Hobbies => &self.hobbies,
        }
    }
}

impl SkillCategory {
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: "New Category".to_string(),
            list: "New Skill".to_string(),
        }
    }

    pub fn set_field(&mut self, field: SkillField, value: impl Into<String>) -> bool {
        let slot = match field {
            SkillField::Category => &mut self.category,
            SkillField::List => &mut self.list,
        };
        assign(slot, value.into())
    }
}

impl Project {
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "Project Name".to_string(),
            description: "Project description.".to_string(),
            technologies: "Tech 1, Tech 2".to_string(),
        }
    }

    pub fn set_field(&mut self, field: ProjectField, value: impl Into<String>) -> bool {
        let slot = match field {
            ProjectField::Name => &mut self.name,
            ProjectField::Description => &mut self.description,
            ProjectField::Technologies => &mut self.technologies,
        };
        assign(slot, value.into())
    }
}

fn replace_list<T: PartialEq>(slot: &mut Vec<T>, value: Vec<T>) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::{Project, RoleUpdate, RoleVariant, PLACEHOLDER_ROLE_NAME};

    fn sample_role() -> RoleVariant {
        RoleVariant {
            summary: "Builds pipelines".to_string(),
            projects: vec![Project::placeholder("proj_1")],
            certifications: vec!["Cert A".to_string()],
            ..RoleVariant::blank("role_a", "Engineer")
        }
    }

    #[test]
    fn duplicate_keeps_content_under_new_identity() {
        let source = sample_role();
        let copy = source.duplicate_as("role_b", "Analyst");
        assert_eq!(copy.id, "role_b");
        assert_eq!(copy.role_name, "Analyst");
        assert_eq!(copy.projects, source.projects);
        assert_eq!(copy.certifications, source.certifications);
    }

    #[test]
    fn apply_merges_only_given_fields() {
        let mut role = sample_role();
        let changed = role.apply(RoleUpdate {
            hobbies: Some("Chess".to_string()),
            ..RoleUpdate::default()
        });
        assert!(changed);
        assert_eq!(role.hobbies, "Chess");
        assert_eq!(role.summary, "Builds pipelines");
        assert_eq!(role.id, "role_a");
    }

    #[test]
    fn apply_with_identical_values_reports_no_change() {
        let mut role = sample_role();
        let changed = role.apply(RoleUpdate {
            summary: Some("Builds pipelines".to_string()),
            certifications: Some(vec!["Cert A".to_string()]),
            ..RoleUpdate::default()
        });
        assert!(!changed);
    }

    #[test]
    fn placeholder_role_has_default_name_and_summary() {
        let role = RoleVariant::placeholder("role_x");
        assert_eq!(role.role_name, PLACEHOLDER_ROLE_NAME);
        assert_eq!(role.summary, "New summary...");
        assert!(role.skills.is_empty());
    }

    #[test]
    fn reads_original_camel_case_shape() {
        let role: RoleVariant = serde_json::from_str(
            r#"{"id":"role_1","roleName":"Data Analyst","certifications":["X"]}"#,
        )
        .expect("role should parse");
        assert_eq!(role.role_name, "Data Analyst");
        assert_eq!(role.certifications, vec!["X".to_string()]);
        assert_eq!(role.hobbies, "");
    }
}
