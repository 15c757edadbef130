use hitstand::{Decision, Hand};
use serde::{Deserialize, Serialize};

use crate::storage::{Game, LeaderboardEntry, Player, PlayerScore};

const DEFAULT_LIMIT: usize = 10;
const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];
const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideRequest {
    pub hands: Vec<Hand>,
    pub game_type: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideResponse {
    pub decisions: Vec<Decision>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: u16,
}

fn is_zero(code: &u16) -> bool {
    *code == 0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Limit and offset as given in the query string. Anything unparsable falls
/// back to the defaults instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|&n| n > 0)
            .map_or(DEFAULT_LIMIT, |n| n as usize);
        let offset = offset
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|&n| n >= 0)
            .map_or(0, |n| n as usize);
        Page { limit, offset }
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let start = self.offset.min(items.len());
        let end = self.offset.saturating_add(self.limit).min(items.len());
        items[start..end].to_vec()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> Page {
        Page::from_query(self.limit.as_deref(), self.offset.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameListQuery {
    pub difficulty: Option<String>,
    pub language: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl GameListQuery {
    pub fn page(&self) -> Page {
        Page::from_query(self.limit.as_deref(), self.offset.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerListQuery {
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PlayerListQuery {
    pub fn page(&self) -> Page {
        Page::from_query(self.limit.as_deref(), self.offset.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameListResponse {
    pub games: Vec<Game>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListResponse {
    pub players: Vec<Player>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerScoresResponse {
    pub player_id: String,
    pub scores: Vec<PlayerScore>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub game_id: String,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Leaderboard,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

fn validate_difficulty(difficulty: &str) -> Result<(), String> {
    if DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(format!(
            "Difficulty must be one of {}",
            DIFFICULTIES.join(", ")
        ))
    }
}

fn validate_max_score(max_score: i64) -> Result<(), String> {
    if max_score >= 1 {
        Ok(())
    } else {
        Err(String::from("Max score must be at least 1"))
    }
}

fn validate_username(username: &str) -> Result<(), String> {
    if USERNAME_LENGTH.contains(&username.chars().count()) {
        Ok(())
    } else {
        Err(String::from("Username must be between 3 and 50 characters"))
    }
}

// Missing fields deserialize to empty values so that they are reported as
// validation errors rather than as malformed bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateGameRequest {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub language: String,
    pub max_score: i64,
}

impl CreateGameRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() || self.description.is_empty() || self.language.is_empty() {
            return Err(String::from(
                "Title, description and language are required",
            ));
        }
        validate_difficulty(&self.difficulty)?;
        validate_max_score(self.max_score)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGameRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
    pub language: Option<String>,
    pub max_score: Option<i64>,
}

impl UpdateGameRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(difficulty) = &self.difficulty {
            validate_difficulty(difficulty)?;
        }
        if let Some(max_score) = self.max_score {
            validate_max_score(max_score)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePlayerRequest {
    pub username: String,
    pub email: String,
}

impl CreatePlayerRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() || self.email.is_empty() {
            return Err(String::from("Username and email are required"));
        }
        validate_username(&self.username)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlayerRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UpdatePlayerRequest {
    pub fn validate(&self) -> Result<(), String> {
        match &self.username {
            Some(username) => validate_username(username),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitScoreRequest {
    pub game_id: String,
    pub score: i64,
}

impl SubmitScoreRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.game_id.is_empty() || self.score < 0 {
            return Err(String::from(
                "Game ID is required and score must be non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_falls_back_to_defaults() {
        assert_eq!(Page::from_query(None, None), Page::default());
        assert_eq!(
            Page::from_query(Some("0"), Some("-4")),
            Page { limit: 10, offset: 0 }
        );
        assert_eq!(
            Page::from_query(Some("abc"), Some("x")),
            Page { limit: 10, offset: 0 }
        );
        assert_eq!(
            Page::from_query(Some("3"), Some("2")),
            Page { limit: 3, offset: 2 }
        );
    }

    #[test]
    fn page_clamps_to_the_items() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(Page { limit: 2, offset: 1 }.apply(&items), vec![2, 3]);
        assert_eq!(Page { limit: 10, offset: 3 }.apply(&items), vec![4, 5]);
        assert!(Page { limit: 10, offset: 9 }.apply(&items).is_empty());
        assert_eq!(Page { limit: usize::MAX, offset: 1 }.apply(&items).len(), 4);
    }

    #[test]
    fn decide_request_wire_format() {
        let request: DecideRequest = serde_json::from_str(
            r#"{"hands": [[{"number": 9, "suit": "hearts"}, {"number": 9, "suit": "spades"}], []], "game_type": 1}"#,
        )
        .unwrap();
        assert_eq!(request.hands.len(), 2);
        assert_eq!(request.hands[0].value(), 8);
        assert!(request.hands[1].is_empty());
        assert_eq!(request.game_type, 1);

        let response = DecideResponse {
            decisions: vec![Decision::Stand, Decision::Hit],
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"decisions":["stand","hit"]}"#
        );
    }

    #[test]
    fn create_game_validation() {
        let mut request = CreateGameRequest {
            title: String::from("Test Game"),
            description: String::from("A test game"),
            difficulty: String::from("easy"),
            language: String::from("go"),
            max_score: 100,
        };
        assert!(request.validate().is_ok());

        request.difficulty = String::from("invalid");
        assert!(request.validate().is_err());
        request.difficulty = String::from("hard");
        request.max_score = -1;
        assert!(request.validate().is_err());
        request.max_score = 1;
        request.description.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_player_validation() {
        let request = CreatePlayerRequest {
            username: String::from("ab"),
            email: String::from("ab@example.com"),
        };
        assert!(request.validate().is_err());
        let request = CreatePlayerRequest {
            username: String::from("carol"),
            email: String::new(),
        };
        assert!(request.validate().is_err());
        let request = CreatePlayerRequest {
            username: String::from("carol"),
            email: String::from("carol@example.com"),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn error_response_omits_empty_fields() {
        let response = ErrorResponse {
            error: String::from("not_found"),
            message: String::new(),
            code: 0,
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"error":"not_found"}"#
        );
    }
}
