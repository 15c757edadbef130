use actix_web::web;
use actix_web::HttpResponse;
use serde_json::json;

use super::ApiError;
use crate::dto::{
    CreateGameRequest, DecideRequest, DecideResponse, GameListQuery, GameListResponse,
    SuccessResponse, UpdateGameRequest,
};
use crate::storage::InMemoryStorage;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "hitstand",
    }))
}

pub async fn game_test() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Game service is operational",
        "status": "success",
    }))
}

/// Runs one decision batch. Every request gets its own random source and,
/// for the deck aware policy, its own deck.
pub async fn decide(request: web::Json<DecideRequest>) -> Result<HttpResponse, ApiError> {
    let DecideRequest { hands, game_type } = request.into_inner();
    let decisions = hitstand::decide_batch(&hands, game_type, &mut rand::thread_rng())?;
    log::debug!(
        "decided {} hands with game type {}",
        decisions.len(),
        game_type
    );
    Ok(HttpResponse::Ok().json(DecideResponse { decisions }))
}

pub async fn list_games(
    storage: web::Data<InMemoryStorage>,
    query: web::Query<GameListQuery>,
) -> HttpResponse {
    let page = query.page();
    let games = storage.list_games(query.difficulty.as_deref(), query.language.as_deref());
    HttpResponse::Ok().json(GameListResponse {
        total: games.len(),
        games: page.apply(&games),
        limit: page.limit,
        offset: page.offset,
    })
}

pub async fn get_game(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let game = storage.get_game(&id)?;
    Ok(HttpResponse::Ok().json(game))
}

pub async fn create_game(
    storage: web::Data<InMemoryStorage>,
    request: web::Json<CreateGameRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate().map_err(ApiError::Validation)?;
    let game = storage.create_game(request);
    log::info!("created game {} ({})", game.id, game.title);
    Ok(HttpResponse::Created().json(game))
}

pub async fn update_game(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
    request: web::Json<UpdateGameRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate().map_err(ApiError::Validation)?;
    let game = storage.update_game(&id, request)?;
    Ok(HttpResponse::Ok().json(game))
}

pub async fn delete_game(
    storage: web::Data<InMemoryStorage>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    storage.delete_game(&id)?;
    log::info!("deleted game {}", id);
    Ok(HttpResponse::Ok().json(SuccessResponse::<()> {
        message: format!("Game {} deleted successfully", id),
        data: None,
    }))
}
