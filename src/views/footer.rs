pub fn render(year: i32) -> String {
    format!(
        r#"<footer>
<div class="inner">
<h3>AI Movie Recommendation System</h3>
<p class="muted">A machine learning project demonstrating content-based and collaborative filtering techniques for personalized movie recommendations. The recommendation models run in a separate backend; this site renders their results.</p>
<h4>Connect</h4>
<p><a class="button" href="https://github.com" rel="noopener">GitHub</a><a class="button" href="https://www.linkedin.com" rel="noopener">LinkedIn</a><a class="button" href="mailto:hello@example.com">Email</a></p>
<p class="center muted">&copy; {year} AI Movie Recommender. Built for learning and portfolio showcase.</p>
</div>
</footer>"#,
        year = year,
    )
}
