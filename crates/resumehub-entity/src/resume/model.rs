//! Resume document model and its input shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use resumehub_core::error::AppError;
use resumehub_core::result::AppResult;
use resumehub_core::types::ResumeId;

use super::sections::{
    ContentBlock, Contact, Contribution, Education, Experience, Location, Project, Skill,
    Technology,
};
use crate::FieldMap;

/// The user-authored body of a resume, stored as a single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub name: String,
    pub nick: String,
    pub name_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials_link: Option<String>,
    #[validate(nested)]
    pub locations: Vec<Location>,
    /// Language name to proficiency.
    pub languages: BTreeMap<String, String>,
    #[validate(nested)]
    pub about: Vec<ContentBlock>,
    pub about_link: String,
    #[validate(nested)]
    pub help: Vec<ContentBlock>,
    pub help_link: String,
    pub avatar: String,
    pub avatar_link: String,
    pub summary: String,
    pub summary_link: String,
    pub website: String,
    #[validate(nested)]
    pub contact: Contact,
    #[validate(nested)]
    pub technologies: Vec<Technology>,
    #[validate(nested)]
    pub experiences: Vec<Experience>,
    #[validate(nested)]
    pub educations: Vec<Education>,
    #[validate(nested)]
    pub skills: Vec<Skill>,
    #[validate(nested)]
    pub projects: Vec<Project>,
    #[validate(nested)]
    pub contributions: Vec<Contribution>,
    pub characteristics: Vec<String>,
    pub keywords: Vec<String>,
}

/// A stored resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: ResumeId,
    /// Owner of the resume. Used only as a filter.
    pub user_id: String,
    /// `false` once soft-deleted.
    pub is_active: bool,
    #[serde(flatten)]
    pub content: ResumeContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResume {
    pub user_id: String,
    #[serde(flatten)]
    pub content: ResumeContent,
}

impl NewResume {
    /// Check every required field, reporting all failures at once.
    pub fn validate_input(&self) -> AppResult<()> {
        let content = self.content.validate().err().map(AppError::from);

        if self.user_id.trim().is_empty() {
            let mut details = content
                .as_ref()
                .and_then(|e| e.details.clone())
                .unwrap_or_else(|| serde_json::json!({}));
            if let Some(map) = details.as_object_mut() {
                map.insert("userId".to_string(), serde_json::json!(["must not be empty"]));
            }
            return Err(AppError::validation("Invalid input: userId: must not be empty")
                .with_details(details));
        }

        match content {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Partial update of top-level resume fields. Absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResumePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub locations: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub about: Option<Vec<ContentBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub help: Option<Vec<ContentBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub technologies: Option<Vec<Technology>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub experiences: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub educations: Option<Vec<Education>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub contributions: Option<Vec<Contribution>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Reassign ownership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub user_id: Option<String>,
    /// Reactivate or deactivate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// The personal-info subset edited from the profile header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A single store write against a resume row.
///
/// `fields` are merged key-by-key into the stored document; a key that is
/// present replaces the stored value wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeUpdate {
    pub fields: FieldMap,
    pub user_id: Option<String>,
    pub is_active: Option<bool>,
}

impl ResumeUpdate {
    /// Build an update from a validated patch.
    pub fn from_patch(patch: &ResumePatch) -> AppResult<Self> {
        let mut fields = to_field_map(patch)?;
        fields.remove("userId");
        fields.remove("isActive");
        Ok(Self {
            fields,
            user_id: patch.user_id.clone(),
            is_active: patch.is_active,
        })
    }

    /// Build an update that replaces one top-level section.
    pub fn section(key: &str, value: serde_json::Value) -> Self {
        let mut fields = FieldMap::new();
        fields.insert(key.to_string(), value);
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Build an update that only flips the active flag.
    pub fn set_active(active: bool) -> Self {
        Self {
            is_active: Some(active),
            ..Self::default()
        }
    }

    /// Whether this update would leave the row untouched apart from timestamps.
    pub fn is_noop(&self) -> bool {
        self.fields.is_empty() && self.user_id.is_none() && self.is_active.is_none()
    }
}

/// Serialize an input struct into the map of supplied top-level fields.
pub fn to_field_map<T: Serialize>(value: &T) -> AppResult<FieldMap> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(AppError::internal(format!(
            "Expected a JSON object for a document patch, got {other}"
        ))),
    }
}

/// Filter for listing resumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeFilter {
    /// Restrict to one owner.
    pub user_id: Option<String>,
    /// Include soft-deleted resumes.
    pub include_inactive: bool,
}

impl ResumeFilter {
    pub fn matches(&self, resume: &Resume) -> bool {
        let owner = self
            .user_id
            .as_deref()
            .is_none_or(|user_id| resume.user_id == user_id);
        owner && (self.include_inactive || resume.is_active)
    }
}
