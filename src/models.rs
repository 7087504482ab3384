use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// A persisted movie, as returned by the store and serialized on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self { id: m.id, title: m.title, director: m.director, year: m.year, genre: m.genre }
    }
}

/// Request body for create and update. Any `id` the client sends is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl NewMovie {
    pub fn new(title: &str, director: &str, year: i32, genre: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            director: Some(director.to_string()),
            year: Some(year),
            genre: Some(genre.to_string()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}
