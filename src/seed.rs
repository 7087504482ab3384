use tracing::info;

use crate::{error::AppResult, models::NewMovie, store::MovieStore};

fn samples() -> [NewMovie; 2] {
    [
        NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi"),
        NewMovie::new("The Shawshank Redemption", "Frank Darabont", 1994, "Drama"),
    ]
}

/// Inserts the sample movies when the store is empty. Returns how many rows
/// were written.
///
/// Must run before the listener is bound. Two processes starting against the
/// same empty database can both seed.
pub async fn seed_if_empty(store: &dyn MovieStore) -> AppResult<usize> {
    let existing = store.count().await?;
    if existing != 0 {
        info!(existing, "movies already present, skipping seed");
        return Ok(0);
    }

    let mut seeded = 0;
    for movie in samples() {
        store.insert(movie).await?;
        seeded += 1;
    }

    info!(seeded, "seeded sample movies");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{db, models::Movie, store::SqlMovieStore};

    /// Records calls instead of touching a database.
    #[derive(Default)]
    struct Recording {
        count: u64,
        count_calls: Mutex<usize>,
        inserted: Mutex<Vec<NewMovie>>,
    }

    #[async_trait::async_trait]
    impl MovieStore for Recording {
        async fn insert(&self, candidate: NewMovie) -> AppResult<Movie> {
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push(candidate.clone());
            Ok(Movie {
                id: inserted.len() as i64,
                title: candidate.title,
                director: candidate.director,
                year: candidate.year,
                genre: candidate.genre,
            })
        }

        async fn find_by_id(&self, _id: i64) -> AppResult<Option<Movie>> {
            Ok(None)
        }

        async fn find_all(&self) -> AppResult<Vec<Movie>> {
            Ok(vec![])
        }

        async fn exists_by_id(&self, _id: i64) -> AppResult<bool> {
            Ok(false)
        }

        async fn delete_by_id(&self, _id: i64) -> AppResult<()> {
            Ok(())
        }

        async fn count(&self) -> AppResult<u64> {
            *self.count_calls.lock().unwrap() += 1;
            Ok(self.count)
        }

        async fn update(&self, _id: i64, _candidate: NewMovie) -> AppResult<Option<Movie>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn empty_store_gets_both_samples_in_order() {
        let store = Recording::default();

        let seeded = seed_if_empty(&store).await.unwrap();

        assert_eq!(seeded, 2);
        assert_eq!(*store.count_calls.lock().unwrap(), 1);
        let inserted = store.inserted.lock().unwrap();
        assert_eq!(inserted[0], NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi"));
        assert_eq!(
            inserted[1],
            NewMovie::new("The Shawshank Redemption", "Frank Darabont", 1994, "Drama")
        );
    }

    #[tokio::test]
    async fn populated_store_is_left_alone() {
        let store = Recording { count: 5, ..Default::default() };

        let seeded = seed_if_empty(&store).await.unwrap();

        assert_eq!(seeded, 0);
        assert_eq!(*store.count_calls.lock().unwrap(), 1);
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeding_twice_is_idempotent() {
        let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
        let store = SqlMovieStore::new(db);

        assert_eq!(seed_if_empty(&store).await.unwrap(), 2);
        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
