struct Feature {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "&#128161;",
        title: "AI-Driven",
        subtitle: "Machine Learning Models",
    },
    Feature {
        icon: "&#128202;",
        title: "Data Analysis",
        subtitle: "Pandas & NumPy",
    },
    Feature {
        icon: "&#9889;",
        title: "Smart Filtering",
        subtitle: "Cosine Similarity",
    },
];

pub fn render() -> String {
    let features: String = FEATURES
        .iter()
        .map(|feature| {
            format!(
                r#"<div class="center"><div class="icon">{}</div><strong>{}</strong><p class="muted">{}</p></div>"#,
                feature.icon,
                feature.title,
                html_escape::encode_text(feature.subtitle),
            )
        })
        .collect();

    format!(
        r##"<section class="hero">
<p class="center"><span class="badge">&#10024; AI-Powered Recommendations</span></p>
<h1>AI-Powered Movie<br>Recommendation System</h1>
<p class="lead">Content-Based &amp; Collaborative Filtering using Machine Learning. Discover your next favorite movie with advanced AI algorithms.</p>
<p class="center">
<a class="button primary" href="#dashboard">&#9654; Explore Recommendations</a>
<a class="button" href="https://github.com" rel="noopener">View GitHub</a>
</p>
<div class="grid">{features}</div>
</section>"##,
        features = features,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_lists_features() {
        let html = render();
        assert!(html.contains("Recommendation System"));
        assert!(html.contains("<p class=\"muted\">Pandas &amp; NumPy</p>"));
        assert!(!html.contains("Pandas & NumPy"));
        assert!(html.contains("Cosine Similarity"));
        assert!(html.contains("href=\"#dashboard\""));
    }
}
