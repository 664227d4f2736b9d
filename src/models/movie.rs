use serde::{Deserialize, Serialize};

/// Separator used by the backend for multi-valued text fields
pub const LIST_SEPARATOR: char = '|';

/// A movie as returned by the recommendation backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    /// Pipe-delimited genre names, e.g. "Action|Sci-Fi"
    pub genres: String,
    pub director: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    pub rating: f64,
    pub year: i32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_rating: Option<f64>,
}

impl Movie {
    /// Genre names in backend order. Separators are not escaped upstream, so
    /// a genre containing `|` is split too.
    pub fn genre_list(&self) -> Vec<&str> {
        split_list(&self.genres)
    }

    pub fn cast_list(&self) -> Vec<&str> {
        self.cast.as_deref().map(split_list).unwrap_or_default()
    }
}

fn split_list(value: &str) -> Vec<&str> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inception() -> Movie {
        serde_json::from_value(json!({
            "movie_id": 3,
            "title": "Inception",
            "genres": "Action|Sci-Fi|Thriller",
            "director": "Christopher Nolan",
            "cast": "Leonardo DiCaprio|Joseph Gordon-Levitt",
            "rating": 8.8,
            "year": 2010,
            "description": "A thief who steals corporate secrets through dream-sharing"
        }))
        .unwrap()
    }

    #[test]
    fn test_genre_list() {
        assert_eq!(inception().genre_list(), vec!["Action", "Sci-Fi", "Thriller"]);
    }

    #[test]
    fn test_cast_list_handles_missing_cast() {
        let mut movie = inception();
        assert_eq!(movie.cast_list().len(), 2);
        movie.cast = None;
        assert!(movie.cast_list().is_empty());
    }

    #[test]
    fn test_optional_scores_are_omitted_when_absent() {
        let value = serde_json::to_value(inception()).unwrap();
        assert!(value.get("similarity_score").is_none());
        assert!(value.get("predicted_rating").is_none());
    }

    #[test]
    fn test_scores_deserialize_when_present() {
        let movie: Movie = serde_json::from_value(json!({
            "movie_id": 8,
            "title": "Interstellar",
            "genres": "Adventure|Drama|Sci-Fi",
            "director": "Christopher Nolan",
            "rating": 8.6,
            "year": 2014,
            "description": "A team of explorers travel through a wormhole in space",
            "similarity_score": 0.42,
            "predicted_rating": 4.1
        }))
        .unwrap();
        assert_eq!(movie.similarity_score, Some(0.42));
        assert_eq!(movie.predicted_rating, Some(4.1));
        assert_eq!(movie.cast, None);
    }
}
