// src/ui.rs
use once_cell::sync::Lazy;

/// Inline colors used by the generated table markup.
pub struct Styles {
    pub header_bg: &'static str,
    pub header_fg: &'static str,
    pub row_even_bg: &'static str,
    pub row_odd_bg: &'static str,
    pub positive_fg: &'static str,
    pub negative_fg: &'static str,
}

pub static TABLE_THEME: Lazy<Styles> = Lazy::new(|| Styles {
    header_bg: "#667eea",
    header_fg: "white",
    row_even_bg: "#f9f9f9",
    row_odd_bg: "white",
    positive_fg: "green",
    negative_fg: "red",
});

pub static LOADING_PLACEHOLDER: Lazy<String> =
    Lazy::new(|| placeholder("Loading visualization"));

pub static FAILED_PLACEHOLDER: Lazy<String> =
    Lazy::new(|| placeholder("Failed to load visualization"));

fn placeholder(message: &str) -> String {
    format!(r#"<p class="loading">{}</p>"#, message)
}

/// Stylesheet embedded in the standalone dashboard page.
pub fn page_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    margin: 0;
    background: #f4f5fb;
    color: #1f2937;
}
header {
    background: #667eea;
    color: white;
    padding: 1.5rem 2rem;
}
main {
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem;
}
section {
    background: white;
    border-radius: 8px;
    padding: 1.5rem;
    margin-bottom: 2rem;
}
.cards {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
}
.card {
    background: white;
    border-radius: 8px;
    padding: 1rem 1.5rem;
}
.card .value {
    font-size: 1.75rem;
    font-weight: bold;
}
.loading {
    color: #6b7280;
    font-style: italic;
}
.error {
    color: red;
}
footer {
    text-align: center;
    color: #6b7280;
    padding: 1rem;
}
"#
}
