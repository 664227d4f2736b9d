use crate::{models::Movie, services::DashboardState};

use super::movie_card;

const GENRE_OPTIONS: [(&str, &str); 6] = [
    ("all-genres", "All Genres"),
    ("action", "Action"),
    ("sci-fi", "Sci-Fi"),
    ("thriller", "Thriller"),
    ("drama", "Drama"),
    ("crime", "Crime"),
];

const RATING_OPTIONS: [(&str, &str); 4] = [
    ("all-ratings", "All Ratings"),
    ("9+", "9.0+"),
    ("8+", "8.0+"),
    ("7+", "7.0+"),
];

const YEAR_OPTIONS: [(&str, &str); 5] = [
    ("all-years", "All Years"),
    ("2020s", "2020s"),
    ("2010s", "2010s"),
    ("2000s", "2000s"),
    ("1990s", "1990s"),
];

/// The recommendations section with its two tabs.
///
/// `Loading` renders `skeleton_count` placeholder cards per tab.
pub fn render(state: &DashboardState, skeleton_count: usize) -> String {
    let (content_cards, collaborative_cards) = match state.data() {
        Some(data) => (
            cards(&data.content_based.movies),
            cards(&data.collaborative.movies),
        ),
        None => {
            let skeletons = movie_card::render_skeleton().repeat(skeleton_count);
            (skeletons.clone(), skeletons)
        }
    };

    let offline_notice = if state.using_mock_data() {
        r#"<p class="offline">Currently using mock data (Backend offline)</p>"#
    } else {
        ""
    };

    format!(
        r#"<section class="dashboard" data-state="{state}">
<h2>Personalized Recommendations</h2>
<p class="lead">Powered by advanced machine learning algorithms analyzing content features and user preferences</p>
{offline_notice}
{filters}
<div class="tabs">
<input type="radio" name="recommendation-tab" id="tab-content" checked>
<label for="tab-content">&#127916; Content-Based</label>
<input type="radio" name="recommendation-tab" id="tab-collaborative">
<label for="tab-collaborative">&#128101; Collaborative</label>
<div class="tab-panel panel-content">
<div class="note"><strong>Content-Based Filtering:</strong> Recommendations based on movie features like genres, directors, and plot keywords using cosine similarity.</div>
<div class="grid">{content_cards}</div>
</div>
<div class="tab-panel panel-collaborative">
<div class="note"><strong>Collaborative Filtering:</strong> Recommendations based on similar users' preferences using user-item interaction matrices.</div>
<div class="grid">{collaborative_cards}</div>
</div>
</div>
</section>"#,
        state = state_name(state),
        offline_notice = offline_notice,
        filters = render_filters(),
        content_cards = content_cards,
        collaborative_cards = collaborative_cards,
    )
}

/// Search bar and filter selects. Presentational only.
pub fn render_filters() -> String {
    format!(
        r#"<form class="filters" onsubmit="return false">
<input type="search" placeholder="Search for movies...">
{genre}
{rating}
{year}
<button class="button primary" type="submit">Apply</button>
</form>"#,
        genre = select("genre", &GENRE_OPTIONS),
        rating = select("rating", &RATING_OPTIONS),
        year = select("year", &YEAR_OPTIONS),
    )
}

fn select(name: &str, options: &[(&str, &str)]) -> String {
    let options: String = options
        .iter()
        .map(|(value, label)| format!(r#"<option value="{}">{}</option>"#, value, label))
        .collect();
    format!(r#"<select name="{}">{}</select>"#, name, options)
}

fn cards(movies: &[Movie]) -> String {
    movies.iter().map(movie_card::render).collect()
}

fn state_name(state: &DashboardState) -> &'static str {
    match state {
        DashboardState::Loading => "loading",
        DashboardState::Online(_) => "online",
        DashboardState::Offline(_) => "offline",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        dashboard::{DashboardData, RecommendationSlot},
        mock_data::{mock_content_based, mock_movies},
    };

    fn data() -> DashboardData {
        DashboardData {
            content_based: RecommendationSlot {
                movies: mock_content_based(3),
                fallback: true,
            },
            collaborative: RecommendationSlot {
                movies: mock_movies().into_iter().rev().take(2).collect(),
                fallback: true,
            },
        }
    }

    #[test]
    fn test_loading_renders_skeletons() {
        let html = render(&DashboardState::Loading, 3);
        assert!(html.contains("data-state=\"loading\""));
        assert_eq!(html.matches("skeleton-card").count(), 6);
        assert!(!html.contains("mock data"));
    }

    #[test]
    fn test_offline_shows_indicator_and_cards_in_order() {
        let html = render(&DashboardState::Offline(data()), 6);
        assert!(html.contains("Currently using mock data (Backend offline)"));
        assert!(html.contains("data-state=\"offline\""));

        let shawshank = html.find("The Shawshank Redemption").unwrap();
        let dark_knight = html.find("The Dark Knight").unwrap();
        assert!(shawshank < dark_knight);
        assert_eq!(html.matches("<article class=\"card\"").count(), 8);
    }

    #[test]
    fn test_online_has_no_indicator() {
        let html = render(&DashboardState::Online(data()), 6);
        assert!(!html.contains("Currently using mock data"));
        assert!(html.contains("data-state=\"online\""));
    }

    #[test]
    fn test_filters_list_genre_options() {
        let html = render_filters();
        assert!(html.contains(r#"<option value="sci-fi">Sci-Fi</option>"#));
        assert!(html.contains(r#"<option value="9+">9.0+</option>"#));
        assert!(html.contains(r#"<option value="1990s">1990s</option>"#));
    }
}
