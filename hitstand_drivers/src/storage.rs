use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::dto::{CreateGameRequest, CreatePlayerRequest, UpdateGameRequest, UpdatePlayerRequest};

const HOUR: u64 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub language: String,
    pub max_score: i64,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub username: String,
    pub email: String,
    pub total_score: i64,
    pub rank: usize,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: String,
    pub game_id: String,
    pub score: i64,
    pub completed: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_id: String,
    pub username: String,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSort {
    #[default]
    Rank,
    Username,
    TotalScore,
}

impl PlayerSort {
    /// Unknown keys sort by rank.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("username") => PlayerSort::Username,
            Some("total_score") => PlayerSort::TotalScore,
            _ => PlayerSort::Rank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0} already exists")]
    Conflict(&'static str),
}

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, Default)]
struct Catalog {
    games: BTreeMap<String, Game>,
    players: BTreeMap<String, Player>,
    scores: BTreeMap<String, Vec<PlayerScore>>,
}

/// In-memory catalog of games, players and their scores, shared by all
/// request handlers. Maps are keyed by id so listings come out in id order.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    catalog: RwLock<Catalog>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a storage seeded with two games and two players.
    pub fn with_sample_data() -> Self {
        let now = unix_now();
        let ago = |hours: u64| now.saturating_sub(hours * HOUR);
        let mut catalog = Catalog::default();

        for game in [
            Game {
                id: String::from("1"),
                title: String::from("Two Sum"),
                description: String::from(
                    "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.",
                ),
                difficulty: String::from("easy"),
                language: String::from("go"),
                max_score: 100,
                created_at: ago(24),
                updated_at: ago(24),
            },
            Game {
                id: String::from("2"),
                title: String::from("Binary Tree Traversal"),
                description: String::from(
                    "Implement inorder, preorder, and postorder traversal of a binary tree.",
                ),
                difficulty: String::from("medium"),
                language: String::from("python"),
                max_score: 200,
                created_at: ago(12),
                updated_at: ago(12),
            },
        ] {
            catalog.games.insert(game.id.clone(), game);
        }

        for player in [
            Player {
                id: String::from("1"),
                username: String::from("alice_coder"),
                email: String::from("alice@example.com"),
                total_score: 250,
                rank: 1,
                created_at: ago(72),
                updated_at: ago(1),
            },
            Player {
                id: String::from("2"),
                username: String::from("bob_dev"),
                email: String::from("bob@example.com"),
                total_score: 180,
                rank: 2,
                created_at: ago(48),
                updated_at: ago(2),
            },
        ] {
            catalog.players.insert(player.id.clone(), player);
        }

        let score = |player_id: &str, game_id: &str, score: i64, completed: bool, hours: u64| {
            PlayerScore {
                player_id: String::from(player_id),
                game_id: String::from(game_id),
                score,
                completed,
                created_at: ago(hours),
                updated_at: ago(hours),
            }
        };
        catalog.scores.insert(
            String::from("1"),
            vec![score("1", "1", 100, true, 24), score("1", "2", 150, true, 12)],
        );
        catalog.scores.insert(
            String::from("2"),
            vec![score("2", "1", 80, true, 20), score("2", "2", 100, false, 6)],
        );

        InMemoryStorage {
            catalog: RwLock::new(catalog),
        }
    }

    // Poisoned locks are taken over.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_games(&self, difficulty: Option<&str>, language: Option<&str>) -> Vec<Game> {
        self.read()
            .games
            .values()
            .filter(|game| difficulty.map_or(true, |d| game.difficulty == d))
            .filter(|game| language.map_or(true, |l| game.language == l))
            .cloned()
            .collect()
    }

    pub fn get_game(&self, id: &str) -> Result<Game, StorageError> {
        self.read()
            .games
            .get(id)
            .cloned()
            .ok_or(StorageError::NotFound("Game"))
    }

    pub fn create_game(&self, request: CreateGameRequest) -> Game {
        let now = unix_now();
        let game = Game {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            difficulty: request.difficulty,
            language: request.language,
            max_score: request.max_score,
            created_at: now,
            updated_at: now,
        };
        self.write().games.insert(game.id.clone(), game.clone());
        game
    }

    pub fn update_game(&self, id: &str, request: UpdateGameRequest) -> Result<Game, StorageError> {
        let mut catalog = self.write();
        let game = catalog
            .games
            .get_mut(id)
            .ok_or(StorageError::NotFound("Game"))?;
        if let Some(title) = request.title {
            game.title = title;
        }
        if let Some(description) = request.description {
            game.description = description;
        }
        if let Some(difficulty) = request.difficulty {
            game.difficulty = difficulty;
        }
        if let Some(language) = request.language {
            game.language = language;
        }
        if let Some(max_score) = request.max_score {
            game.max_score = max_score;
        }
        game.updated_at = unix_now();
        Ok(game.clone())
    }

    pub fn delete_game(&self, id: &str) -> Result<(), StorageError> {
        self.write()
            .games
            .remove(id)
            .map(|_| ())
            .ok_or(StorageError::NotFound("Game"))
    }

    pub fn list_players(&self, sort: PlayerSort) -> Vec<Player> {
        let mut players: Vec<Player> = self.read().players.values().cloned().collect();
        match sort {
            PlayerSort::Rank => players.sort_by_key(|p| p.rank),
            PlayerSort::Username => players.sort_by(|a, b| a.username.cmp(&b.username)),
            PlayerSort::TotalScore => players.sort_by(|a, b| b.total_score.cmp(&a.total_score)),
        }
        players
    }

    pub fn get_player(&self, id: &str) -> Result<Player, StorageError> {
        self.read()
            .players
            .get(id)
            .cloned()
            .ok_or(StorageError::NotFound("Player"))
    }

    /// New players are ranked after everybody already registered.
    pub fn create_player(&self, request: CreatePlayerRequest) -> Result<Player, StorageError> {
        let mut catalog = self.write();
        for player in catalog.players.values() {
            if player.username == request.username {
                return Err(StorageError::Conflict("Username"));
            }
            if player.email == request.email {
                return Err(StorageError::Conflict("Email"));
            }
        }

        let now = unix_now();
        let player = Player {
            id: uuid::Uuid::new_v4().to_string(),
            username: request.username,
            email: request.email,
            total_score: 0,
            rank: catalog.players.len() + 1,
            created_at: now,
            updated_at: now,
        };
        catalog.players.insert(player.id.clone(), player.clone());
        catalog.scores.insert(player.id.clone(), Vec::new());
        Ok(player)
    }

    pub fn update_player(
        &self,
        id: &str,
        request: UpdatePlayerRequest,
    ) -> Result<Player, StorageError> {
        let mut catalog = self.write();
        if !catalog.players.contains_key(id) {
            return Err(StorageError::NotFound("Player"));
        }
        for (other_id, other) in &catalog.players {
            if other_id == id {
                continue;
            }
            if request.username.as_deref() == Some(other.username.as_str()) {
                return Err(StorageError::Conflict("Username"));
            }
            if request.email.as_deref() == Some(other.email.as_str()) {
                return Err(StorageError::Conflict("Email"));
            }
        }

        let player = catalog
            .players
            .get_mut(id)
            .ok_or(StorageError::NotFound("Player"))?;
        if let Some(username) = request.username {
            player.username = username;
        }
        if let Some(email) = request.email {
            player.email = email;
        }
        player.updated_at = unix_now();
        Ok(player.clone())
    }

    pub fn delete_player(&self, id: &str) -> Result<(), StorageError> {
        let mut catalog = self.write();
        catalog
            .players
            .remove(id)
            .ok_or(StorageError::NotFound("Player"))?;
        catalog.scores.remove(id);
        Ok(())
    }

    /// Records a score for a game. A player keeps one entry per game, which is
    /// only replaced by a strictly higher score. The player's total is the sum
    /// of the kept entries. Returns the submitted entry.
    pub fn submit_score(
        &self,
        player_id: &str,
        game_id: &str,
        score: i64,
    ) -> Result<PlayerScore, StorageError> {
        let mut catalog = self.write();
        if !catalog.players.contains_key(player_id) {
            return Err(StorageError::NotFound("Player"));
        }

        let now = unix_now();
        let submitted = PlayerScore {
            player_id: String::from(player_id),
            game_id: String::from(game_id),
            score,
            completed: score > 0,
            created_at: now,
            updated_at: now,
        };

        let scores = catalog.scores.entry(String::from(player_id)).or_default();
        match scores.iter_mut().find(|s| s.game_id == game_id) {
            Some(existing) => {
                if score > existing.score {
                    *existing = submitted.clone();
                }
            }
            None => scores.push(submitted.clone()),
        }
        let total_score: i64 = scores.iter().map(|s| s.score).sum();

        if let Some(player) = catalog.players.get_mut(player_id) {
            player.total_score = total_score;
            player.updated_at = now;
        }
        Ok(submitted)
    }

    pub fn get_player_scores(&self, player_id: &str) -> Result<Vec<PlayerScore>, StorageError> {
        let catalog = self.read();
        if !catalog.players.contains_key(player_id) {
            return Err(StorageError::NotFound("Player"));
        }
        Ok(catalog.scores.get(player_id).cloned().unwrap_or_default())
    }

    /// All players ranked by total score, best first.
    pub fn global_leaderboard(&self) -> Vec<LeaderboardEntry> {
        let entries = self
            .read()
            .players
            .values()
            .map(|player| (player.id.clone(), player.username.clone(), player.total_score))
            .collect();
        rank_entries(entries)
    }

    /// Players ranked by their best score for one game. Players without a
    /// positive score for that game are left out.
    pub fn game_leaderboard(&self, game_id: &str) -> Vec<LeaderboardEntry> {
        let catalog = self.read();
        let entries = catalog
            .scores
            .iter()
            .filter_map(|(player_id, scores)| {
                let best = scores
                    .iter()
                    .filter(|s| s.game_id == game_id)
                    .map(|s| s.score)
                    .max()
                    .filter(|&best| best > 0)?;
                let player = catalog.players.get(player_id)?;
                Some((player_id.clone(), player.username.clone(), best))
            })
            .collect();
        rank_entries(entries)
    }
}

fn rank_entries(mut entries: Vec<(String, String, i64)>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.2.cmp(&a.2));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (player_id, username, score))| LeaderboardEntry {
            rank: i + 1,
            player_id,
            username,
            score,
        })
        .collect()
}
