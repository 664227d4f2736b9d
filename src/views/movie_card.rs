use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::Movie;

pub fn render(movie: &Movie) -> String {
    let genres: String = movie
        .genre_list()
        .into_iter()
        .map(|genre| format!("<span>{}</span>", encode_text(genre)))
        .collect();

    format!(
        r#"<article class="card" data-movie-id="{id}">
<div class="poster" role="img" aria-label="{label} poster">{title}<div class="rating">&#9733; {rating}</div></div>
<h3>{title}</h3>
<div class="genres">{genres}</div>
<p class="muted">{year}</p>
</article>"#,
        id = movie.movie_id,
        label = encode_double_quoted_attribute(&movie.title),
        title = encode_text(&movie.title),
        rating = format_rating(movie.rating),
        genres = genres,
        year = movie.year,
    )
}

/// Placeholder shown while the dashboard is loading
pub fn render_skeleton() -> String {
    r#"<article class="card skeleton-card">
<div class="poster skeleton"></div>
<div class="skeleton" style="height:1.5rem;width:75%;margin-top:1rem"></div>
<div class="skeleton" style="height:1rem;width:100%;margin-top:.5rem"></div>
<div class="skeleton" style="height:1rem;width:50%;margin-top:.5rem"></div>
</article>"#
        .to_string()
}

/// Ratings as the backend sends them, but never with float noise
fn format_rating(rating: f64) -> String {
    let rounded = (rating * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
