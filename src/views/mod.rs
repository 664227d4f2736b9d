//! Server-rendered HTML for the demo page
//!
//! Each section is a plain function returning a `String`. Backend text is
//! encoded with `html_escape` before it is interpolated; static copy is
//! inlined.

use crate::services::DashboardState;

pub mod dashboard;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod movie_card;
pub mod status_banner;
pub mod tech_stack;

/// The full page. The dashboard starts in its loading state and the inline
/// script swaps in `/fragments/dashboard` and `/fragments/status`.
pub fn render_page(skeleton_count: usize, year: i32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Movie Recommendation System</title>
<style>{styles}</style>
</head>
<body>
<main>
<div id="status-banner"></div>
<div class="hero-wrap">{hero}</div>
<div id="dashboard">{dashboard}</div>
{how_it_works}
{tech_stack}
{footer}
</main>
<script>{script}</script>
</body>
</html>
"#,
        styles = STYLES,
        hero = hero::render(),
        dashboard = dashboard::render(&DashboardState::Loading, skeleton_count),
        how_it_works = how_it_works::render(),
        tech_stack = tech_stack::render(),
        footer = footer::render(year),
        script = SCRIPT,
    )
}

const SCRIPT: &str = r#"
async function swap(id, url) {
  try {
    const response = await fetch(url);
    if (response.ok) document.getElementById(id).innerHTML = await response.text();
  } catch (e) {
    console.error("failed to load " + url, e);
  }
}
swap("status-banner", "/fragments/status");
swap("dashboard", "/fragments/dashboard");
"#;

const STYLES: &str = r#"
:root { --bg: #0b0b14; --card: #161624; --fg: #f4f4f8; --muted: #9a9ab0; --primary: #a855f7; --secondary: #3b82f6; --accent: #ec4899; }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; }
section { padding: 4rem 1.5rem; max-width: 80rem; margin: 0 auto; }
h1, h2 { text-align: center; letter-spacing: -0.02em; }
.lead { text-align: center; color: var(--muted); max-width: 42rem; margin: 1rem auto; }
.hero-wrap { background: linear-gradient(135deg, rgba(88,28,135,.2), rgba(30,58,138,.2), rgba(131,24,67,.2)); }
.badge { display: inline-block; border-radius: 999px; padding: .25rem .75rem; font-size: .75rem; background: rgba(168,85,247,.12); color: var(--primary); }
.center { text-align: center; }
.button { display: inline-block; padding: .75rem 1.5rem; border-radius: .5rem; border: 1px solid #333; color: var(--fg); text-decoration: none; margin: .25rem; }
.button.primary { background: linear-gradient(90deg, var(--primary), var(--secondary)); border: none; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.card { background: var(--card); border: 1px solid #262638; border-radius: .75rem; padding: 1rem; position: relative; overflow: hidden; }
.poster { aspect-ratio: 2 / 3; border-radius: .5rem; display: flex; align-items: center; justify-content: center; text-align: center; padding: 1rem; background: linear-gradient(160deg, #2e1065, #1e3a8a); font-weight: 600; position: relative; }
.rating { position: absolute; top: .5rem; right: .5rem; background: rgba(0,0,0,.8); border-radius: 999px; padding: .2rem .6rem; font-size: .85rem; }
.genres span { display: inline-block; margin: .15rem; padding: .1rem .5rem; border-radius: 999px; background: rgba(59,130,246,.2); font-size: .75rem; }
.muted { color: var(--muted); font-size: .875rem; }
.skeleton { background: #22223a; border-radius: .5rem; animation: pulse 1.5s infinite; }
@keyframes pulse { 50% { opacity: .5; } }
.offline { text-align: center; color: #fbbf24; font-size: .875rem; }
.filters { display: flex; flex-wrap: wrap; gap: .75rem; padding: 1rem; border: 1px solid #262638; border-radius: .75rem; margin-bottom: 2rem; }
.filters input, .filters select { background: var(--bg); color: var(--fg); border: 1px solid #333; border-radius: .5rem; padding: .5rem .75rem; }
.filters input { flex: 1; min-width: 12rem; }
.tabs > input { display: none; }
.tabs > label { display: inline-block; padding: .5rem 1.25rem; cursor: pointer; border-radius: .5rem; color: var(--muted); }
.tabs > input:checked + label { background: var(--card); color: var(--fg); }
.tab-panel { display: none; margin-top: 2rem; }
#tab-content:checked ~ .panel-content, #tab-collaborative:checked ~ .panel-collaborative { display: block; }
.note { border: 1px solid rgba(168,85,247,.2); background: rgba(168,85,247,.05); border-radius: .5rem; padding: 1rem; margin-bottom: 1.5rem; }
.banner { position: fixed; top: 0; left: 0; right: 0; z-index: 50; padding: .5rem 1rem; font-size: .875rem; display: flex; justify-content: space-between; }
.banner.online { background: rgba(34,197,94,.1); color: #4ade80; }
.banner.offline { background: rgba(245,158,11,.1); color: #fbbf24; }
.banner button { background: none; border: none; color: inherit; cursor: pointer; opacity: .7; }
.step-number { position: absolute; right: -.5rem; top: -1.5rem; font-size: 6rem; font-weight: 700; color: rgba(168,85,247,.06); }
.tags span { display: inline-block; margin: .15rem; padding: .2rem .7rem; border-radius: 999px; background: rgba(168,85,247,.1); color: var(--primary); font-size: .75rem; }
.icon { font-size: 3rem; }
footer { border-top: 1px solid #262638; }
footer .inner { max-width: 80rem; margin: 0 auto; padding: 3rem 1.5rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_contains_every_section() {
        let page = render_page(6, 2026);
        for marker in [
            "AI-Powered Movie",
            "Personalized Recommendations",
            "How It Works",
            "Tech Stack",
            "&copy; 2026 AI Movie Recommender",
            "/fragments/dashboard",
        ] {
            assert!(page.contains(marker), "missing {marker}");
        }
        assert_eq!(page.matches("class=\"card skeleton-card\"").count(), 12);
    }
}
