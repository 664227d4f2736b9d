/// Bundled fallback dataset
///
/// Used when the backend is unavailable. The selections only imitate the
/// shape of real recommendations; they carry no similarity meaning.
use rand::{seq::SliceRandom, Rng};

use crate::models::Movie;

/// Number of movies each mock selection returns
pub const MOCK_RECOMMENDATION_COUNT: usize = 6;

struct MockMovie {
    movie_id: i64,
    title: &'static str,
    genres: &'static str,
    director: &'static str,
    cast: &'static str,
    rating: f64,
    year: i32,
    description: &'static str,
}

const MOCK_MOVIES: [MockMovie; 10] = [
    MockMovie {
        movie_id: 1,
        title: "The Shawshank Redemption",
        genres: "Drama",
        director: "Frank Darabont",
        cast: "Tim Robbins|Morgan Freeman",
        rating: 9.3,
        year: 1994,
        description: "Two imprisoned men bond over a number of years",
    },
    MockMovie {
        movie_id: 2,
        title: "The Dark Knight",
        genres: "Action|Crime|Drama",
        director: "Christopher Nolan",
        cast: "Christian Bale|Heath Ledger",
        rating: 9.0,
        year: 2008,
        description: "Batman must accept one of the greatest psychological tests",
    },
    MockMovie {
        movie_id: 3,
        title: "Inception",
        genres: "Action|Sci-Fi|Thriller",
        director: "Christopher Nolan",
        cast: "Leonardo DiCaprio|Joseph Gordon-Levitt",
        rating: 8.8,
        year: 2010,
        description: "A thief who steals corporate secrets through dream-sharing",
    },
    MockMovie {
        movie_id: 4,
        title: "Pulp Fiction",
        genres: "Crime|Drama",
        director: "Quentin Tarantino",
        cast: "John Travolta|Uma Thurman",
        rating: 8.9,
        year: 1994,
        description: "The lives of two mob hitmen intersect with others",
    },
    MockMovie {
        movie_id: 5,
        title: "The Matrix",
        genres: "Action|Sci-Fi",
        director: "Lana Wachowski",
        cast: "Keanu Reeves|Laurence Fishburne",
        rating: 8.7,
        year: 1999,
        description: "A computer hacker learns about the true nature of reality",
    },
    MockMovie {
        movie_id: 8,
        title: "Interstellar",
        genres: "Adventure|Drama|Sci-Fi",
        director: "Christopher Nolan",
        cast: "Matthew McConaughey|Anne Hathaway",
        rating: 8.6,
        year: 2014,
        description: "A team of explorers travel through a wormhole in space",
    },
    MockMovie {
        movie_id: 10,
        title: "The Prestige",
        genres: "Drama|Mystery|Thriller",
        director: "Christopher Nolan",
        cast: "Christian Bale|Hugh Jackman",
        rating: 8.5,
        year: 2006,
        description: "Two stage magicians engage in competitive one-upmanship",
    },
    MockMovie {
        movie_id: 18,
        title: "Blade Runner 2049",
        genres: "Drama|Mystery|Sci-Fi",
        director: "Denis Villeneuve",
        cast: "Ryan Gosling|Harrison Ford",
        rating: 8.0,
        year: 2017,
        description: "A blade runner discovers a secret that could plunge society",
    },
    MockMovie {
        movie_id: 21,
        title: "Arrival",
        genres: "Drama|Sci-Fi",
        director: "Denis Villeneuve",
        cast: "Amy Adams|Jeremy Renner",
        rating: 7.9,
        year: 2016,
        description: "A linguist works to interpret alien communications",
    },
    MockMovie {
        movie_id: 23,
        title: "Ex Machina",
        genres: "Drama|Sci-Fi|Thriller",
        director: "Alex Garland",
        cast: "Alicia Vikander|Domhnall Gleeson",
        rating: 7.7,
        year: 2014,
        description: "A programmer evaluates the human qualities of an AI",
    },
];

impl From<&MockMovie> for Movie {
    fn from(mock: &MockMovie) -> Self {
        Movie {
            movie_id: mock.movie_id,
            title: mock.title.to_string(),
            genres: mock.genres.to_string(),
            director: mock.director.to_string(),
            cast: Some(mock.cast.to_string()),
            rating: mock.rating,
            year: mock.year,
            description: mock.description.to_string(),
            similarity_score: None,
            predicted_rating: None,
        }
    }
}

/// The full fallback list in its fixed order
pub fn mock_movies() -> Vec<Movie> {
    MOCK_MOVIES.iter().map(Movie::from).collect()
}

/// Stand-in for content-based results: the first movies in list order that
/// are not the seed itself.
pub fn mock_content_based(movie_id: i64) -> Vec<Movie> {
    MOCK_MOVIES
        .iter()
        .filter(|movie| movie.movie_id != movie_id)
        .take(MOCK_RECOMMENDATION_COUNT)
        .map(Movie::from)
        .collect()
}

/// Stand-in for collaborative results: a shuffled slice of the list.
/// `_user_id` does not influence the selection.
pub fn mock_collaborative<R: Rng + ?Sized>(_user_id: i64, rng: &mut R) -> Vec<Movie> {
    let mut movies = mock_movies();
    movies.shuffle(rng);
    movies.truncate(MOCK_RECOMMENDATION_COUNT);
    movies
}
