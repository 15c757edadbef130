//! HTTP boundary around the decision engine, plus the game, player and
//! leaderboard catalog. Only `game::decide` reaches the engine, and it never
//! sees the catalog storage.

#[cfg(test)]
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    crate::storage::InMemoryStorage::with_sample_data(),
                ))
                .configure(crate::server::configure),
        )
        .await
    };
}

pub mod game;
pub mod leaderboard;
pub mod player;

use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::web;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::ResponseError;
use hitstand::EngineError;

use crate::dto::ErrorResponse;
use crate::storage::{InMemoryStorage, StorageError};
use crate::ConfigServer;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InvalidGameType(#[from] EngineError),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::InvalidGameType(_) => "invalid_game_type",
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(_) => ApiError::NotFound(error.to_string()),
            StorageError::Conflict(_) => ApiError::Conflict(error.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Validation(_) | ApiError::InvalidGameType(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        log::warn!("{} {}: {}", status.as_u16(), self.kind(), self);
        HttpResponse::build(status).json(ErrorResponse {
            error: String::from(self.kind()),
            message: self.to_string(),
            code: status.as_u16(),
        })
    }
}

/// Rejects bodies that are not valid JSON for the target type with the same
/// error shape as every other client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| {
        ApiError::InvalidRequest(format!("Invalid request body: {}", err)).into()
    })
}

/// Registers every route. Expects an `InMemoryStorage` in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(game::health))
        .service(
            web::scope("/game")
                .route("/test", web::get().to(game::game_test))
                .route("/decide", web::post().to(game::decide)),
        )
        .service(
            web::resource("/games")
                .route(web::get().to(game::list_games))
                .route(web::post().to(game::create_game)),
        )
        .service(
            web::resource("/games/{id}")
                .route(web::get().to(game::get_game))
                .route(web::put().to(game::update_game))
                .route(web::delete().to(game::delete_game)),
        )
        .service(
            web::resource("/players")
                .route(web::get().to(player::list_players))
                .route(web::post().to(player::create_player)),
        )
        .service(
            web::resource("/players/{id}")
                .route(web::get().to(player::get_player))
                .route(web::put().to(player::update_player))
                .route(web::delete().to(player::delete_player)),
        )
        .service(
            web::resource("/players/{id}/scores")
                .route(web::get().to(player::get_player_scores))
                .route(web::post().to(player::submit_score)),
        )
        .route("/leaderboard", web::get().to(leaderboard::global))
        .route("/leaderboard/{game_id}", web::get().to(leaderboard::by_game));
}

pub async fn run(config: &ConfigServer) -> std::io::Result<()> {
    let storage = web::Data::new(InMemoryStorage::with_sample_data());
    log::info!("starting hitstand server on {}:{}", config.host, config.port);
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(storage.clone())
            .configure(configure)
    });
    if config.workers > 0 {
        server = server.workers(config.workers);
    }
    server.bind(config.get_bind_address())?.run().await?;
    log::info!("hitstand server stopped");
    Ok(())
}
