struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    tech: [&'static str; 3],
}

const STEPS: [Step; 4] = [
    Step {
        icon: "&#128451;",
        title: "Data Collection",
        description: "Gathering and preprocessing movie datasets using Pandas and NumPy for efficient analysis",
        tech: ["Pandas", "NumPy", "CSV Processing"],
    },
    Step {
        icon: "&#128256;",
        title: "Feature Engineering",
        description: "Extracting meaningful features like genres, cast, directors, and keywords from raw data",
        tech: ["TF-IDF", "Vectorization", "Normalization"],
    },
    Step {
        icon: "&#127919;",
        title: "Content-Based Filtering",
        description: "Computing similarity scores between movies using cosine similarity on feature vectors",
        tech: ["Cosine Similarity", "Scikit-Learn", "Feature Matching"],
    },
    Step {
        icon: "&#128376;",
        title: "Collaborative Filtering",
        description: "Building user-item matrices to find patterns in user preferences and generate recommendations",
        tech: ["Matrix Factorization", "User Clustering", "Pattern Recognition"],
    },
];

pub fn render() -> String {
    let steps: String = STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let tags: String = step
                .tech
                .iter()
                .map(|tech| format!("<span>{}</span>", tech))
                .collect();
            format!(
                r#"<div class="card"><div class="step-number">{number}</div><div class="icon">{icon}</div><h3>{title}</h3><p class="muted">{description}</p><div class="tags">{tags}</div></div>"#,
                number = index + 1,
                icon = step.icon,
                title = step.title,
                description = step.description,
                tags = tags,
            )
        })
        .collect();

    format!(
        r#"<section class="how-it-works">
<h2>How It Works</h2>
<p class="lead">Our recommendation engine leverages advanced machine learning techniques to deliver personalized movie suggestions</p>
<div class="grid">{steps}</div>
</section>"#,
        steps = steps,
    )
}
