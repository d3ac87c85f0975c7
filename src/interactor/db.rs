use crate::entity::{Subscription, Watcher};
use chrono::Utc;
use log::info;
use sqlx::{Error as SqlxError, SqlitePool};
use std::collections::HashMap;

// Insert or replace a watchlist entry, keyed by (user_id, app_id)
pub async fn add_to_watchlist(
    pool: &SqlitePool,
    user_id: i64,
    app_id: &str,
    game_title: &str,
    chat_id: i64,
    target_price: Option<f64>,
    region: &str,
) -> Result<(), SqlxError> {
    sqlx::query(
        "INSERT OR REPLACE INTO watchlist
         (user_id, app_id, game_title, chat_id, target_price, region, added_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(app_id)
    .bind(game_title)
    .bind(chat_id)
    .bind(target_price)
    .bind(region)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    info!(
        "Saved watchlist entry for user {} and app {}",
        user_id, app_id
    );

    Ok(())
}

// Remove a watchlist entry, reporting whether a row existed
pub async fn remove_from_watchlist(
    pool: &SqlitePool,
    user_id: i64,
    app_id: &str,
) -> Result<bool, SqlxError> {
    let result = sqlx::query("DELETE FROM watchlist WHERE user_id = ? AND app_id = ?")
        .bind(user_id)
        .bind(app_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Get all subscriptions for one user, oldest first
pub async fn get_watchlist(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Subscription>, SqlxError> {
    let rows = sqlx::query_as::<_, Subscription>(
        "SELECT * FROM watchlist WHERE user_id = ? ORDER BY added_at ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Snapshot of every subscription, grouped by app id. Read in a single
/// statement; the monitoring pass never observes a partial write.
pub async fn get_all_watched_games(
    pool: &SqlitePool,
) -> Result<HashMap<String, Vec<Watcher>>, SqlxError> {
    let rows = sqlx::query_as::<_, Subscription>(
        "SELECT * FROM watchlist ORDER BY app_id ASC, added_at ASC",
    )
    .fetch_all(pool)
    .await?;

    let mut watched_games: HashMap<String, Vec<Watcher>> = HashMap::new();
    for row in rows {
        watched_games
            .entry(row.app_id.clone())
            .or_default()
            .push(Watcher::from(row));
    }

    Ok(watched_games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_upsert_and_read_back() {
        let pool = test_pool().await;

        add_to_watchlist(&pool, 1, "730", "Counter-Strike 2", 100, Some(15.0), "us")
            .await
            .unwrap();

        let watchlist = get_watchlist(&pool, 1).await.unwrap();
        assert_eq!(watchlist.len(), 1);

        let sub = &watchlist[0];
        assert_eq!(sub.app_id, "730");
        assert_eq!(sub.game_title, "Counter-Strike 2");
        assert_eq!(sub.chat_id, 100);
        assert_eq!(sub.target_price, Some(15.0));
        assert_eq!(sub.region, "us");
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_entry() {
        let pool = test_pool().await;

        add_to_watchlist(&pool, 1, "730", "Counter-Strike 2", 100, Some(15.0), "us")
            .await
            .unwrap();
        add_to_watchlist(&pool, 1, "730", "CS2", 200, None, "eu")
            .await
            .unwrap();

        let watchlist = get_watchlist(&pool, 1).await.unwrap();
        assert_eq!(watchlist.len(), 1);

        // Fully replaced, no merge with the prior record
        let sub = &watchlist[0];
        assert_eq!(sub.game_title, "CS2");
        assert_eq!(sub.chat_id, 200);
        assert_eq!(sub.target_price, None);
        assert_eq!(sub.region, "eu");
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let pool = test_pool().await;

        assert!(!remove_from_watchlist(&pool, 1, "730").await.unwrap());

        add_to_watchlist(&pool, 1, "730", "Counter-Strike 2", 100, None, "us")
            .await
            .unwrap();

        assert!(remove_from_watchlist(&pool, 1, "730").await.unwrap());
        assert!(get_watchlist(&pool, 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_watchlists_are_per_user() {
        let pool = test_pool().await;

        add_to_watchlist(&pool, 1, "730", "Counter-Strike 2", 100, None, "us")
            .await
            .unwrap();
        add_to_watchlist(&pool, 2, "570", "Dota 2", 100, None, "us")
            .await
            .unwrap();

        let watchlist = get_watchlist(&pool, 1).await.unwrap();
        assert_eq!(watchlist.len(), 1);
        assert_eq!(watchlist[0].app_id, "730");
    }

    #[tokio::test]
    async fn test_all_watched_games_groups_by_app_id() {
        let pool = test_pool().await;

        add_to_watchlist(&pool, 1, "730", "Counter-Strike 2", 100, Some(15.0), "us")
            .await
            .unwrap();
        add_to_watchlist(&pool, 2, "730", "Counter-Strike 2", 200, Some(10.0), "us")
            .await
            .unwrap();
        add_to_watchlist(&pool, 1, "570", "Dota 2", 100, None, "us")
            .await
            .unwrap();

        let watched = get_all_watched_games(&pool).await.unwrap();
        assert_eq!(watched.len(), 2);
        assert_eq!(watched["730"].len(), 2);
        assert_eq!(watched["570"].len(), 1);

        let watchers = &watched["730"];
        assert!(watchers.iter().any(|w| w.target_price == Some(15.0)));
        assert!(watchers.iter().any(|w| w.target_price == Some(10.0)));
    }
}
