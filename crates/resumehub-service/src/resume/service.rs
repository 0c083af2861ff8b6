//! Resume CRUD service.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use validator::Validate;

use resumehub_core::error::AppError;
use resumehub_core::result::AppResult;
use resumehub_core::traits::Clock;
use resumehub_core::types::ResumeId;
use resumehub_database::ResumeRepository;
use resumehub_entity::resume::{
    ContactPatch, ContentBlock, Contribution, Education, Experience, NewResume, PersonalInfo,
    Project, Resume, ResumeFilter, ResumePatch, ResumeUpdate, Skill, Technology, to_field_map,
};

use crate::ack::Acknowledgement;
use crate::context::RequestContext;

const NOT_FOUND: &str = "Resume not found";

/// Manages resume documents.
#[derive(Debug, Clone)]
pub struct ResumeService {
    /// Resume repository.
    resumes: Arc<dyn ResumeRepository>,
    /// Time source for `createdAt`/`updatedAt`.
    clock: Arc<dyn Clock>,
}

impl ResumeService {
    /// Creates a new resume service.
    pub fn new(resumes: Arc<dyn ResumeRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { resumes, clock }
    }

    /// Lists a user's resumes, most recently updated first.
    pub async fn list_by_user(
        &self,
        user_id: &str,
        include_inactive: bool,
    ) -> AppResult<Vec<Resume>> {
        self.resumes
            .list(&ResumeFilter {
                user_id: Some(user_id.to_string()),
                include_inactive,
            })
            .await
    }

    /// Lists every resume, most recently updated first.
    pub async fn list_all(&self, include_inactive: bool) -> AppResult<Vec<Resume>> {
        self.resumes
            .list(&ResumeFilter {
                user_id: None,
                include_inactive,
            })
            .await
    }

    /// Gets a resume by id, active or not.
    pub async fn get_by_id(&self, id: ResumeId) -> AppResult<Resume> {
        self.resumes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Creates a resume. Nothing is written unless every field validates.
    pub async fn create(&self, ctx: &RequestContext, input: NewResume) -> AppResult<Resume> {
        input.validate_input()?;

        let resume = self.resumes.insert(&input, self.clock.now()).await?;

        info!(
            resume_id = %resume.id,
            user_id = %resume.user_id,
            ip = %ctx.ip_address,
            "Resume created"
        );

        Ok(resume)
    }

    /// Merges the supplied top-level fields. Fields not supplied are left
    /// untouched.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: ResumeId,
        patch: ResumePatch,
    ) -> AppResult<Resume> {
        patch.validate()?;
        let update = ResumeUpdate::from_patch(&patch)?;
        let resume = self.apply(id, &update).await?;

        info!(
            resume_id = %id,
            fields = update.fields.len(),
            ip = %ctx.ip_address,
            "Resume updated"
        );

        Ok(resume)
    }

    /// Marks a resume inactive. The document is kept.
    pub async fn soft_delete(&self, ctx: &RequestContext, id: ResumeId) -> AppResult<Acknowledgement> {
        self.apply(id, &ResumeUpdate::set_active(false)).await?;

        info!(resume_id = %id, ip = %ctx.ip_address, "Resume deactivated");

        Ok(Acknowledgement::ok("Resume deleted successfully"))
    }

    /// Merges the supplied subset of name, summary and avatar.
    pub async fn update_personal_info(&self, id: ResumeId, info: PersonalInfo) -> AppResult<Resume> {
        info.validate()?;
        let update = ResumeUpdate {
            fields: to_field_map(&info)?,
            ..ResumeUpdate::default()
        };
        self.apply(id, &update).await
    }

    /// Shallow-merges the supplied contact fields over the stored contact.
    pub async fn update_contact(&self, id: ResumeId, patch: ContactPatch) -> AppResult<Resume> {
        patch.validate()?;
        if patch.is_empty() {
            return self.get_by_id(id).await;
        }

        let fields = to_field_map(&patch)?;
        let resume = self
            .resumes
            .merge_contact(id, &fields, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        debug!(resume_id = %id, fields = fields.len(), "Contact merged");
        Ok(resume)
    }

    /// Replaces the `about` blocks.
    pub async fn update_about(&self, id: ResumeId, about: Vec<ContentBlock>) -> AppResult<Resume> {
        self.replace_section(id, "about", &about).await
    }

    /// Replaces the work history.
    pub async fn update_experiences(
        &self,
        id: ResumeId,
        experiences: Vec<Experience>,
    ) -> AppResult<Resume> {
        self.replace_section(id, "experiences", &experiences).await
    }

    /// Replaces the education history.
    pub async fn update_educations(
        &self,
        id: ResumeId,
        educations: Vec<Education>,
    ) -> AppResult<Resume> {
        self.replace_section(id, "educations", &educations).await
    }

    /// Replaces the skills list.
    pub async fn update_skills(&self, id: ResumeId, skills: Vec<Skill>) -> AppResult<Resume> {
        self.replace_section(id, "skills", &skills).await
    }

    /// Replaces the projects list.
    pub async fn update_projects(&self, id: ResumeId, projects: Vec<Project>) -> AppResult<Resume> {
        self.replace_section(id, "projects", &projects).await
    }

    /// Replaces the technology badges.
    pub async fn update_technologies(
        &self,
        id: ResumeId,
        technologies: Vec<Technology>,
    ) -> AppResult<Resume> {
        self.replace_section(id, "technologies", &technologies).await
    }

    /// Replaces the open-source contributions.
    pub async fn update_contributions(
        &self,
        id: ResumeId,
        contributions: Vec<Contribution>,
    ) -> AppResult<Resume> {
        self.replace_section(id, "contributions", &contributions)
            .await
    }

    async fn replace_section<T>(&self, id: ResumeId, section: &str, items: &[T]) -> AppResult<Resume>
    where
        T: Validate + Serialize,
    {
        validate_items(section, items)?;
        let update = ResumeUpdate::section(section, serde_json::to_value(items)?);
        let resume = self.apply(id, &update).await?;

        debug!(resume_id = %id, section, items = items.len(), "Resume section replaced");
        Ok(resume)
    }

    async fn apply(&self, id: ResumeId, update: &ResumeUpdate) -> AppResult<Resume> {
        if update.is_noop() {
            return self.get_by_id(id).await;
        }

        self.resumes
            .update(id, update, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }
}

/// Validate every element of a section, reporting paths like
/// `experiences[0].company`.
fn validate_items<T: Validate>(section: &str, items: &[T]) -> AppResult<()> {
    let mut details = serde_json::Map::new();

    for (index, item) in items.iter().enumerate() {
        let Err(errors) = item.validate() else {
            continue;
        };
        if let Some(serde_json::Value::Object(fields)) = AppError::from(errors).details {
            for (path, messages) in fields {
                details.insert(format!("{section}[{index}].{path}"), messages);
            }
        }
    }

    if details.is_empty() {
        return Ok(());
    }

    let summary = details.keys().cloned().collect::<Vec<_>>().join(", ");
    Err(AppError::validation(format!("Invalid input: {summary}"))
        .with_details(serde_json::Value::Object(details)))
}
