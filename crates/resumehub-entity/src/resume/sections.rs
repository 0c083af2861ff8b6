//! Nested records that make up a resume document.
//!
//! Required fields must be present and well-typed; `contact.email` must
//! also be a valid address. Optional fields are omitted from the stored
//! JSON when absent.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact details. Only `email` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub socials: Option<Vec<SocialLink>>,
}

/// Partial contact used for shallow merges over the stored contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub socials: Option<Vec<SocialLink>>,
}

impl ContactPatch {
    /// Whether no field was supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A social network link shown in the contact block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// Free-form content block used by `about`, `help` and experience contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContentBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    pub name: String,
    pub link: String,
}

/// A technology badge with its rendered image size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Technology {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub image: String,
    #[validate(range(min = 0.0))]
    pub width: f64,
    #[validate(range(min = 0.0))]
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Experience {
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[validate(nested)]
    pub contents: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Education {
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Skill {
    pub name: String,
    #[validate(range(min = 0.0))]
    pub years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Project {
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub description: String,
}

/// An open-source contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Contribution {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_requires_valid_email() {
        let contact: Contact =
            serde_json::from_value(serde_json::json!({ "email": "nope" })).expect("parse");
        assert!(contact.validate().is_err());

        let contact: Contact =
            serde_json::from_value(serde_json::json!({ "email": "ada@example.com" }))
                .expect("parse");
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn test_contact_without_email_does_not_parse() {
        let result: Result<Contact, _> =
            serde_json::from_value(serde_json::json!({ "github": "ada" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_patch_serializes_only_supplied_fields() {
        let patch = ContactPatch {
            github: Some("ada".to_string()),
            ..ContactPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).expect("serialize"),
            serde_json::json!({ "github": "ada" })
        );
        assert!(!patch.is_empty());
        assert!(ContactPatch::default().is_empty());
    }

    #[test]
    fn test_experience_and_education_without_dates() {
        let experience: Experience = serde_json::from_value(serde_json::json!({
            "company": "Acme",
            "title": "Dev",
            "contents": []
        }))
        .expect("parse");
        assert!(experience.start.is_none());
        assert!(experience.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&experience).expect("serialize"),
            serde_json::json!({ "company": "Acme", "title": "Dev", "contents": [] })
        );

        let education: Education = serde_json::from_value(serde_json::json!({
            "company": "University of London",
            "title": "Mathematics",
            "description": "Self-taught"
        }))
        .expect("parse");
        assert!(education.start.is_none());
        assert!(education.validate().is_ok());
    }

    #[test]
    fn test_empty_strings_are_accepted() {
        let location = Location {
            name: "Remote".to_string(),
            link: String::new(),
        };
        assert!(location.validate().is_ok());

        let contribution = Contribution {
            name: String::new(),
            description: None,
            link: String::new(),
        };
        assert!(contribution.validate().is_ok());
    }

    #[test]
    fn test_negative_skill_years_rejected() {
        let skill = Skill {
            name: "Rust".to_string(),
            years: -1.0,
        };
        assert!(skill.validate().is_err());
    }
}
