use actix_web::web;
use actix_web::HttpResponse;

use super::ApiError;
use crate::dto::{
    CreatePlayerRequest, PlayerListQuery, PlayerListResponse, PlayerScoresResponse,
    SubmitScoreRequest, SuccessResponse, UpdatePlayerRequest,
};
use crate::storage::{InMemoryStorage, PlayerSort};

pub async fn list_players(
    storage: web::Data<InMemoryStorage>,
    query: web::Query<PlayerListQuery>,
) -> HttpResponse {
    let page = query.page();
    let players = storage.list_players(PlayerSort::from_key(query.sort.as_deref()));
    HttpResponse::Ok().json(PlayerListResponse {
        total: players.len(),
        players: page.apply(&players),
        limit: page.limit,
        offset: page.offset,
    })
}

pub async fn get_player(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let player = storage.get_player(&id)?;
    Ok(HttpResponse::Ok().json(player))
}

pub async fn create_player(
    storage: web::Data<InMemoryStorage>,
    request: web::Json<CreatePlayerRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate().map_err(ApiError::Validation)?;
    let player = storage.create_player(request)?;
    log::info!("created player {} ({})", player.id, player.username);
    Ok(HttpResponse::Created().json(player))
}

pub async fn update_player(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
    request: web::Json<UpdatePlayerRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate().map_err(ApiError::Validation)?;
    let player = storage.update_player(&id, request)?;
    Ok(HttpResponse::Ok().json(player))
}

pub async fn delete_player(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    storage.delete_player(&id)?;
    log::info!("deleted player {}", id);
    Ok(HttpResponse::Ok().json(SuccessResponse::<()> {
        message: format!("Player {} deleted successfully", id),
        data: None,
    }))
}

pub async fn submit_score(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
    request: web::Json<SubmitScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    // An unknown player is reported before the body is validated.
    storage.get_player(&id)?;
    let request = request.into_inner();
    request.validate().map_err(ApiError::Validation)?;
    let score = storage.submit_score(&id, &request.game_id, request.score)?;
    Ok(HttpResponse::Ok().json(SuccessResponse {
        message: String::from("Score submitted successfully"),
        data: Some(score),
    }))
}

pub async fn get_player_scores(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let player_id = id.into_inner();
    let scores = storage.get_player_scores(&player_id)?;
    Ok(HttpResponse::Ok().json(PlayerScoresResponse {
        total: scores.len(),
        player_id,
        scores,
    }))
}
