//! Resume aggregate: the document, its sections and update inputs.

pub mod model;
pub mod sections;

pub use model::{
    NewResume, PersonalInfo, Resume, ResumeContent, ResumeFilter, ResumePatch, ResumeUpdate,
    to_field_map,
};
pub use sections::{
    ContentBlock, Contact, ContactPatch, Contribution, Education, Experience, Location, Project,
    Skill, SocialLink, Technology,
};
