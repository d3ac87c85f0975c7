use async_trait::async_trait;

/// A well-known game the bot can resolve without the API. The price endpoint
/// is keyed by Steam app id and has no search route, so lookups run against
/// this built-in table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRef {
    pub name: &'static str,
    pub app_id: &'static str,
}

const COMMON_GAMES: &[GameRef] = &[
    GameRef { name: "Counter-Strike 2", app_id: "730" },
    GameRef { name: "Dota 2", app_id: "570" },
    GameRef { name: "Team Fortress 2", app_id: "440" },
    GameRef { name: "Half-Life 2", app_id: "220" },
    GameRef { name: "Portal 2", app_id: "620" },
    GameRef { name: "Left 4 Dead 2", app_id: "550" },
    GameRef { name: "Garry's Mod", app_id: "4000" },
    GameRef { name: "Terraria", app_id: "105600" },
    GameRef { name: "Stardew Valley", app_id: "413150" },
    GameRef { name: "The Witcher 3", app_id: "292030" },
];

const MAX_RESULTS: usize = 5;

#[async_trait]
pub trait SearchInteractor: Send + Sync {
    async fn search_games(&self, query: &str) -> Vec<GameRef>;
}

pub struct SearchInteractorImpl;

#[async_trait]
impl SearchInteractor for SearchInteractorImpl {
    async fn search_games(&self, query: &str) -> Vec<GameRef> {
        let query = query.to_lowercase();

        COMMON_GAMES
            .iter()
            .filter(|game| game.name.to_lowercase().contains(&query))
            .take(MAX_RESULTS)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let results = SearchInteractorImpl.search_games("counter").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].app_id, "730");
    }

    #[tokio::test]
    async fn test_search_matches_substrings() {
        let results = SearchInteractorImpl.search_games("2").await;
        assert!(results.len() <= MAX_RESULTS);
        assert!(results.iter().all(|game| game.name.contains('2')));
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        assert!(SearchInteractorImpl.search_games("no such game").await.is_empty());
    }
}
