struct Technology {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    category: &'static str,
}

const TECHNOLOGIES: [Technology; 6] = [
    Technology {
        name: "Python",
        description: "Core language for ML algorithms and data processing",
        icon: "&#128013;",
        category: "Backend",
    },
    Technology {
        name: "Pandas",
        description: "Data manipulation and analysis framework",
        icon: "&#128060;",
        category: "Data Science",
    },
    Technology {
        name: "NumPy",
        description: "Numerical computing and array operations",
        icon: "&#128290;",
        category: "Data Science",
    },
    Technology {
        name: "Scikit-Learn",
        description: "Machine learning library for similarity metrics",
        icon: "&#129302;",
        category: "ML Framework",
    },
    Technology {
        name: "Rust",
        description: "Web server, backend client and page rendering",
        icon: "&#129408;",
        category: "Frontend",
    },
    Technology {
        name: "axum",
        description: "Async HTTP framework serving the page and fragments",
        icon: "&#9881;",
        category: "Frontend",
    },
];

pub fn render() -> String {
    let cards: String = TECHNOLOGIES
        .iter()
        .map(|tech| {
            format!(
                r#"<div class="card"><div class="icon">{}</div><span class="badge">{}</span><h3>{}</h3><p class="muted">{}</p></div>"#,
                tech.icon, tech.category, tech.name, tech.description,
            )
        })
        .collect();

    format!(
        r#"<section class="tech-stack">
<h2>Tech Stack</h2>
<p class="lead">Built with industry-standard tools and frameworks for machine learning and modern web development</p>
<div class="grid">{cards}</div>
</section>"#,
        cards = cards,
    )
}
