//! End-to-end tests: visualization loading and the dashboard page against a
//! canned dashboard server.

mod common;

use common::{serve, Canned};
use roi_dashboard::dashboard::Dashboard;
use roi_dashboard::source::load_table;
use roi_dashboard::{
    build_table, ApiClient, Config, Document, LoadOutcome, TableSource, VisualizationLoader,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn breakdown(key: &str, groups: &[(&str, f64, f64, f64)]) -> Canned {
    Canned::json(json!(groups
        .iter()
        .map(|(name, revenue, spend, roi)| json!({
            key: name,
            "Revenue": revenue,
            "Marketing_Spend": spend,
            "ROI": roi
        }))
        .collect::<Vec<_>>()))
}

fn dashboard_routes() -> Vec<(&'static str, Canned)> {
    vec![
        ("/health", Canned::json(json!({"status": "healthy", "success": true}))),
        (
            "/api/summary",
            Canned::json(json!({
                "total_revenue": 1234567.0,
                "total_marketing_spend": 200000.0,
                "overall_roi": 517.28,
                "best_campaign_type": "Social Media",
                "best_campaign_roi": 812.04,
                "top_regions": {"Germany": 300000.0, "USA": 700000.0}
            })),
        ),
        (
            "/api/roi/region",
            breakdown("Country", &[("USA", 700000.0, 90000.0, 677.8), ("UK", 1000.0, 5000.0, -80.0)]),
        ),
        (
            "/api/roi/campaign-type",
            breakdown("Campaign_Type", &[("Social Media", 500000.0, 55000.0, 809.1)]),
        ),
        ("/api/roi/category", Canned::status(500)),
        (
            "/api/roi/campaigns",
            Canned::json(json!([
                {"Campaign_ID": "C1", "Campaign_Type": "Email", "Country": "USA",
                 "ProductCategory": "Toys", "Revenue": 2000.0, "Marketing_Spend": 1000.0, "ROI": 100.0},
                {"Campaign_ID": "C2", "Campaign_Type": "TV", "Country": "UK",
                 "ProductCategory": "Books", "Revenue": 500.0, "Marketing_Spend": 1000.0, "ROI": -50.0}
            ])),
        ),
        ("/api/viz/choropleth", Canned::html("<div class=\"choropleth\"></div>")),
        ("/api/viz/scatter", Canned::html("<div class=\"scatter\"></div>")),
        ("/api/viz/campaign-bar", Canned::html("<div class=\"campaign-bar\"></div>")),
        ("/api/viz/category-bar", Canned::html("<div class=\"category-bar\"></div>")),
    ]
}

#[tokio::test]
async fn test_dashboard_page_contains_every_section() {
    let base = serve(dashboard_routes()).await;
    let client = ApiClient::new(base);
    let config = Config::default();

    let page = Dashboard::new(&client, &config).render().await.unwrap();

    // cards
    assert!(page.contains("$1,234,567"));
    assert!(page.contains("517.3%"));
    assert!(page.contains("Social Media"));
    assert!(page.contains("Top regions: USA ($700,000), Germany ($300,000)"));

    // tables
    assert!(page.contains(r#"<span style="color: red; font-weight: bold;">-80.0%</span>"#));
    assert!(page.contains(r#"<span style="color: green; font-weight: bold;">809.1%</span>"#));
    assert!(page.contains("HTTP error fetching /api/roi/category: status 500"));
    assert!(page.find(">C1<").unwrap() < page.find(">C2<").unwrap());

    // charts; region-altair has no route and falls back to the placeholder
    assert!(page.contains("<div class=\"scatter\"></div>"));
    assert!(page.contains("<div class=\"category-bar\"></div>"));
    assert!(page.contains(r#"<div id="region-altair-chart"><p class="loading">Failed to load visualization</p></div>"#));
}

#[tokio::test]
async fn test_dashboard_fails_without_summary() {
    let base = serve(vec![("/health", Canned::json(json!({"status": "healthy"})))]).await;
    let client = ApiClient::new(base);
    let config = Config::default();

    let err = Dashboard::new(&client, &config).render().await.unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_loader_missing_container_does_not_touch_document() {
    let base = serve(vec![("/api/viz/scatter", Canned::html("<svg/>"))]).await;
    let doc = Arc::new(Document::with_containers(["scatter-chart"]));
    let loader = VisualizationLoader::new(Arc::new(ApiClient::new(base)), doc.clone());

    let outcome = loader.load("/api/viz/scatter", "no-such-container").await;

    assert_eq!(outcome, LoadOutcome::MissingContainer);
    assert_eq!(doc.to_html(), "<div id=\"scatter-chart\"></div>");
}

#[tokio::test]
async fn test_loader_last_request_wins_over_slow_response() {
    let base = serve(vec![
        (
            "/api/viz/slow",
            Canned::html("<p>slow</p>").delayed(Duration::from_millis(300)),
        ),
        ("/api/viz/fast", Canned::html("<p>fast</p>")),
    ])
    .await;
    let doc = Arc::new(Document::with_containers(["chart"]));
    let loader = VisualizationLoader::new(Arc::new(ApiClient::new(base)), doc.clone());

    let (slow, fast) = tokio::join!(
        loader.load("/api/viz/slow", "chart"),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            loader.load("/api/viz/fast", "chart").await
        }
    );

    assert_eq!(slow, LoadOutcome::Superseded);
    assert_eq!(fast, LoadOutcome::Loaded);
    assert_eq!(doc.inner_html("chart").as_deref(), Some("<p>fast</p>"));
}

#[tokio::test]
async fn test_table_from_endpoint() {
    let base = serve(vec![(
        "/api/roi/region",
        breakdown("Country", &[("USA", 10.0, 5.0, 100.0), ("Canada", 4.0, 8.0, -50.0)]),
    )])
    .await;
    let client = ApiClient::new(base);

    let data = load_table(&TableSource::parse("/api/roi/region"), &client, &[])
        .await
        .unwrap();
    let html = build_table(&data.rows, &data.columns, None);

    assert_eq!(data.columns.len(), 4);
    assert!(html.find(">USA<").unwrap() < html.find(">Canada<").unwrap());
    assert!(html.contains(r#"<th style="padding: 1rem; text-align: right;">ROI</th>"#));
}
