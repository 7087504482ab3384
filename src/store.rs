use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::movie,
    error::AppResult,
    models::{Movie, NewMovie},
};

/// Persistence operations over the `movie` table.
///
/// Absence is reported through `Option`/`bool`; only infrastructure failures
/// come back as errors.
#[async_trait::async_trait]
pub trait MovieStore: Send + Sync {
    /// Persists a new row and returns it with its assigned id.
    async fn insert(&self, candidate: NewMovie) -> AppResult<Movie>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    /// Every row, oldest first.
    async fn find_all(&self) -> AppResult<Vec<Movie>>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Removes the row if present. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;

    /// Overwrites all mutable fields of an existing row. Returns `None` without
    /// writing anything when `id` is unknown.
    async fn update(&self, id: i64, candidate: NewMovie) -> AppResult<Option<Movie>>;
}

#[derive(Clone)]
pub struct SqlMovieStore {
    db: DatabaseConnection,
}

impl SqlMovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl MovieStore for SqlMovieStore {
    async fn insert(&self, candidate: NewMovie) -> AppResult<Movie> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(candidate.title),
            director: Set(candidate.director),
            year: Set(candidate.year),
            genre: Set(candidate.genre),
        };

        let saved = model.insert(&self.db).await?;
        tracing::debug!(id = saved.id, "movie inserted");
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let found = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Movie::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let n = movie::Entity::find().filter(movie::Column::Id.eq(id)).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(id, rows = res.rows_affected, "movie deleted");
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    async fn update(&self, id: i64, candidate: NewMovie) -> AppResult<Option<Movie>> {
        let Some(existing) = movie::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: movie::ActiveModel = existing.into();
        model.title = Set(candidate.title);
        model.director = Set(candidate.director);
        model.year = Set(candidate.year);
        model.genre = Set(candidate.genre);

        updated_or_missing(model.update(&self.db).await)
    }
}

/// A row deleted between the lookup and the write surfaces as
/// `RecordNotUpdated`; report it the same way as a missing id.
fn updated_or_missing(res: Result<movie::Model, DbErr>) -> AppResult<Option<Movie>> {
    match res {
        Ok(updated) => Ok(Some(updated.into())),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
