//! Resume CRUD and section handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use resumehub_entity::resume::{
    ContactPatch, ContentBlock, Contribution, Education, Experience, NewResume, PersonalInfo,
    Project, Resume, ResumePatch, Skill, Technology,
};
use resumehub_service::Acknowledgement;

use crate::dto::request::ListResumesQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ClientContext, JsonBody, QueryParams, parse_resume_id};
use crate::state::AppState;

type ResumeResponse = ApiResult<Json<ApiResponse<Resume>>>;

/// GET /api/users/{userId}/resumes
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    QueryParams(query): QueryParams<ListResumesQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Resume>>>> {
    let resumes = state
        .resume_service
        .list_by_user(&user_id, query.include_inactive)
        .await?;
    Ok(Json(ApiResponse::ok(resumes)))
}

/// GET /api/resumes
pub async fn list_all(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListResumesQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Resume>>>> {
    let resumes = state.resume_service.list_all(query.include_inactive).await?;
    Ok(Json(ApiResponse::ok(resumes)))
}

/// GET /api/resumes/{id}
pub async fn get_resume(State(state): State<AppState>, Path(id): Path<String>) -> ResumeResponse {
    let resume = state.resume_service.get_by_id(parse_resume_id(&id)?).await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// POST /api/resumes
pub async fn create_resume(
    State(state): State<AppState>,
    ctx: ClientContext,
    JsonBody(input): JsonBody<NewResume>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Resume>>)> {
    let resume = state.resume_service.create(&ctx, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resume))))
}

/// PATCH /api/resumes/{id}
pub async fn update_resume(
    State(state): State<AppState>,
    ctx: ClientContext,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ResumePatch>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update(&ctx, parse_resume_id(&id)?, patch)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// DELETE /api/resumes/{id}
pub async fn delete_resume(
    State(state): State<AppState>,
    ctx: ClientContext,
    Path(id): Path<String>,
) -> ApiResult<Json<Acknowledgement>> {
    let ack = state
        .resume_service
        .soft_delete(&ctx, parse_resume_id(&id)?)
        .await?;
    Ok(Json(ack))
}

/// PUT /api/resumes/{id}/personal-info
pub async fn update_personal_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(info): JsonBody<PersonalInfo>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_personal_info(parse_resume_id(&id)?, info)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PATCH /api/resumes/{id}/contact
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ContactPatch>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_contact(parse_resume_id(&id)?, patch)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PUT /api/resumes/{id}/about
pub async fn update_about(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(about): JsonBody<Vec<ContentBlock>>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_about(parse_resume_id(&id)?, about)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PUT /api/resumes/{id}/experiences
pub async fn update_experiences(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(experiences): JsonBody<Vec<Experience>>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_experiences(parse_resume_id(&id)?, experiences)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PUT /api/resumes/{id}/educations
pub async fn update_educations(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(educations): JsonBody<Vec<Education>>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_educations(parse_resume_id(&id)?, educations)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PUT /api/resumes/{id}/skills
pub async fn update_skills(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(skills): JsonBody<Vec<Skill>>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_skills(parse_resume_id(&id)?, skills)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PUT /api/resumes/{id}/projects
pub async fn update_projects(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(projects): JsonBody<Vec<Project>>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_projects(parse_resume_id(&id)?, projects)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PUT /api/resumes/{id}/technologies
pub async fn update_technologies(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(technologies): JsonBody<Vec<Technology>>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_technologies(parse_resume_id(&id)?, technologies)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}

/// PUT /api/resumes/{id}/contributions
pub async fn update_contributions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(contributions): JsonBody<Vec<Contribution>>,
) -> ResumeResponse {
    let resume = state
        .resume_service
        .update_contributions(parse_resume_id(&id)?, contributions)
        .await?;
    Ok(Json(ApiResponse::ok(resume)))
}
