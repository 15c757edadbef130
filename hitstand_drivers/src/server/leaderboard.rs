use actix_web::web;
use actix_web::HttpResponse;

use crate::dto::{Leaderboard, LeaderboardResponse, PageQuery};
use crate::storage::{InMemoryStorage, LeaderboardEntry};

const GLOBAL: &str = "global";

fn respond(game_id: String, entries: Vec<LeaderboardEntry>, query: &PageQuery) -> HttpResponse {
    let page = query.page();
    HttpResponse::Ok().json(LeaderboardResponse {
        total: entries.len(),
        leaderboard: Leaderboard {
            game_id,
            entries: page.apply(&entries),
        },
        limit: page.limit,
        offset: page.offset,
    })
}

pub async fn global(
    storage: web::Data<InMemoryStorage>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    respond(String::from(GLOBAL), storage.global_leaderboard(), &query)
}

/// An unknown game yields an empty leaderboard.
pub async fn by_game(
    storage: web::Data<InMemoryStorage>,
    game_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let game_id = game_id.into_inner();
    let entries = storage.game_leaderboard(&game_id);
    respond(game_id, entries, &query)
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn global_leaderboard_ranks_totals() {
        let app = test_app!();
        let request = test::TestRequest::get().uri("/leaderboard").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["leaderboard"]["game_id"], "global");
        assert_eq!(body["total"], 2);
        assert_eq!(
            body["leaderboard"]["entries"][0],
            json!({"rank": 1, "player_id": "1", "username": "alice_coder", "score": 250})
        );
        assert_eq!(body["leaderboard"]["entries"][1]["rank"], 2);

        let request = test::TestRequest::get()
            .uri("/leaderboard?limit=1&offset=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["leaderboard"]["entries"][0]["username"], "bob_dev");
    }

    #[actix_web::test]
    async fn game_leaderboard_follows_submitted_scores() {
        let app = test_app!();
        let request = test::TestRequest::get().uri("/leaderboard/2").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["leaderboard"]["game_id"], "2");
        assert_eq!(body["leaderboard"]["entries"][0]["username"], "alice_coder");
        assert_eq!(body["leaderboard"]["entries"][0]["score"], 150);

        let request = test::TestRequest::post()
            .uri("/players/2/scores")
            .set_json(json!({"game_id": "2", "score": 175}))
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::get().uri("/leaderboard/2").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["leaderboard"]["entries"][0]["username"], "bob_dev");
        assert_eq!(body["leaderboard"]["entries"][1]["rank"], 2);
    }

    #[actix_web::test]
    async fn unknown_game_has_empty_leaderboard() {
        let app = test_app!();
        let request = test::TestRequest::get().uri("/leaderboard/404").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["total"], 0);
        assert_eq!(body["leaderboard"]["entries"], json!([]));
    }
}
