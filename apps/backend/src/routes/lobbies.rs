//! Lobby HTTP endpoints.
//!
//! Acting identities (`leader_id`, promoted player) are taken from the
//! request as given; there is no authentication layer.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{HardSkill, Profile, SoftSkill};
use crate::error::AppError;
use crate::extractors::{AccessCode, Validate, ValidatedJson};
use crate::state::app_state::AppState;

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLobbyRequest {
    pub master_name: String,
    pub master_avatar: String,
    pub name: String,
    pub max_hard_skills: usize,
    pub max_soft_skills: usize,
}

impl Validate for CreateLobbyRequest {
    fn validate(&self) -> Result<(), String> {
        require_text("master_name", &self.master_name)?;
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequest {
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub hard_skills: Vec<HardSkill>,
    #[serde(default)]
    pub soft_skills: Vec<SoftSkill>,
}

impl Validate for JoinRequest {
    fn validate(&self) -> Result<(), String> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorRequest {
    pub name: String,
    pub avatar: String,
}

impl Validate for MentorRequest {
    fn validate(&self) -> Result<(), String> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectTeamRequest {
    pub team_id: usize,
    pub leader_id: String,
}

impl Validate for SelectTeamRequest {
    fn validate(&self) -> Result<(), String> {
        require_text("leader_id", &self.leader_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectPlayerRequest {
    pub player_id: String,
    pub leader_id: String,
}

impl Validate for SelectPlayerRequest {
    fn validate(&self) -> Result<(), String> {
        require_text("player_id", &self.player_id)?;
        require_text("leader_id", &self.leader_id)
    }
}

async fn create_lobby(
    state: web::Data<AppState>,
    body: ValidatedJson<CreateLobbyRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let master = Profile::new_master(req.master_name, req.master_avatar);
    let view = state
        .service()
        .create_lobby(master, &req.name, req.max_hard_skills, req.max_soft_skills)
        .await?;
    Ok(HttpResponse::Created().json(view))
}

async fn get_lobby(
    state: web::Data<AppState>,
    code: AccessCode,
) -> Result<HttpResponse, AppError> {
    let view = state.service().get_lobby(code.as_str()).await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn join_lobby(
    state: web::Data<AppState>,
    code: AccessCode,
    body: ValidatedJson<JoinRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let player = Profile::new_player(req.name, req.avatar, req.hard_skills, req.soft_skills);
    let view = state.service().join_lobby(code.as_str(), player).await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn join_mentor(
    state: web::Data<AppState>,
    code: AccessCode,
    body: ValidatedJson<MentorRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let mentor = Profile::new_mentor(req.name, req.avatar);
    let view = state.service().join_lobby(code.as_str(), mentor).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Closes the lobby to new joins and kicks off team creation.
async fn close_lobby(
    state: web::Data<AppState>,
    code: AccessCode,
) -> Result<HttpResponse, AppError> {
    let view = state.service().start_team_creation(code.as_str()).await?;
    Ok(HttpResponse::Accepted().json(view))
}

async fn promote_player(
    state: web::Data<AppState>,
    code: AccessCode,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (_, player_id) = path.into_inner();
    let view = state
        .service()
        .promote_leader(code.as_str(), &player_id)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn select_team(
    state: web::Data<AppState>,
    code: AccessCode,
    body: ValidatedJson<SelectTeamRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .service()
        .select_team(code.as_str(), &body.leader_id, body.team_id)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn select_player(
    state: web::Data<AppState>,
    code: AccessCode,
    body: ValidatedJson<SelectPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let view = state
        .service()
        .select_player(code.as_str(), &body.leader_id, &body.player_id)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_lobby))
        .route("/{access_code}", web::get().to(get_lobby))
        .route("/{access_code}/join", web::post().to(join_lobby))
        .route("/{access_code}/join/mentor", web::post().to(join_mentor))
        .route("/{access_code}/close", web::post().to(close_lobby))
        .route(
            "/{access_code}/promote/{player_id}",
            web::post().to(promote_player),
        )
        .route("/{access_code}/select/team", web::post().to(select_team))
        .route("/{access_code}/select/player", web::post().to(select_player));
}
