// src/dashboard.rs
//! Builds the standalone ROI dashboard page from a running dashboard server.

use chrono::Local;
use futures_util::future::join_all;
use serde_json::Value;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::data_types::{row_from_json, Column, Row};
use crate::error::ApiError;
use crate::format::format_currency;
use crate::models::{CampaignRoi, Health, Summary, SummaryCards};
use crate::renderer::{Document, Renderer};
use crate::table::{build_table, escape_html};
use crate::ui::page_css;
use crate::viz::{LoadOutcome, VisualizationLoader};

const TOP_CAMPAIGN_LIMIT: usize = 10;

/// One of the aggregated ROI tables on the dashboard.
struct Breakdown {
    endpoint: &'static str,
    container: &'static str,
    title: &'static str,
    group_key: &'static str,
    group_label: &'static str,
}

const BREAKDOWNS: [Breakdown; 3] = [
    Breakdown {
        endpoint: "/api/roi/region",
        container: "roi-region-table",
        title: "ROI by Region",
        group_key: "Country",
        group_label: "Country",
    },
    Breakdown {
        endpoint: "/api/roi/campaign-type",
        container: "roi-campaign-type-table",
        title: "ROI by Campaign Type",
        group_key: "Campaign_Type",
        group_label: "Campaign Type",
    },
    Breakdown {
        endpoint: "/api/roi/category",
        container: "roi-category-table",
        title: "ROI by Product Category",
        group_key: "ProductCategory",
        group_label: "Product Category",
    },
];

const CAMPAIGNS_CONTAINER: &str = "top-campaigns-table";
const CARDS_CONTAINER: &str = "summary-cards";

pub fn breakdown_columns(group_key: &str, group_label: &str) -> Vec<Column> {
    vec![
        Column::new(group_key, group_label),
        Column::new("Revenue", "Revenue").currency(),
        Column::new("Marketing_Spend", "Marketing Spend").currency(),
        Column::new("ROI", "ROI").percent(),
    ]
}

pub fn campaign_columns() -> Vec<Column> {
    vec![
        Column::new("Campaign_ID", "Campaign"),
        Column::new("Campaign_Type", "Type"),
        Column::new("Country", "Country"),
        Column::new("ProductCategory", "Category"),
        Column::new("Revenue", "Revenue").currency(),
        Column::new("Marketing_Spend", "Marketing Spend").currency(),
        Column::new("ROI", "ROI").percent(),
    ]
}

pub struct Dashboard<'a> {
    client: &'a ApiClient,
    config: &'a Config,
}

impl<'a> Dashboard<'a> {
    pub fn new(client: &'a ApiClient, config: &'a Config) -> Self {
        Dashboard { client, config }
    }

    /// Fetches every section and returns the finished HTML page.
    ///
    /// Only a failed summary aborts; a failed table shows an inline error
    /// and a failed chart shows the loader's placeholder.
    pub async fn render(&self) -> Result<String, ApiError> {
        match self.client.fetch_json::<Health>("/health").await {
            Ok(health) => log::info!("Dashboard server status: {}", health.status),
            Err(err) => log::warn!("Health check failed, continuing: {}", err),
        }

        let document = Arc::new(self.layout());

        let summary: Summary = self.client.fetch_json("/api/summary").await?;
        document.set_inner_html(CARDS_CONTAINER, &render_cards(&summary));

        for breakdown in &BREAKDOWNS {
            let html = self.breakdown_table(breakdown).await;
            document.set_inner_html(breakdown.container, &html);
        }

        let campaigns = self.campaign_table().await;
        document.set_inner_html(CAMPAIGNS_CONTAINER, &campaigns);

        let loader = VisualizationLoader::new(Arc::new(self.client.clone()), document.clone());
        let outcomes = join_all(
            self.config
                .visualizations
                .iter()
                .map(|viz| loader.load(&viz.endpoint, &viz.container)),
        )
        .await;

        let failed = outcomes
            .iter()
            .filter(|outcome| **outcome == LoadOutcome::Failed)
            .count();
        if failed > 0 {
            log::warn!("{} of {} visualizations failed to load", failed, outcomes.len());
        }

        Ok(self.page(&document, &summary))
    }

    fn layout(&self) -> Document {
        let document = Document::new();
        document.add_container(CARDS_CONTAINER);
        for breakdown in &BREAKDOWNS {
            document.add_container(breakdown.container);
        }
        document.add_container(CAMPAIGNS_CONTAINER);
        for viz in &self.config.visualizations {
            document.add_container(viz.container.clone());
        }
        document
    }

    async fn breakdown_table(&self, breakdown: &Breakdown) -> String {
        match self.client.fetch_json::<Vec<Value>>(breakdown.endpoint).await {
            Ok(items) => {
                let rows: Vec<Row> = items.iter().filter_map(row_from_json).collect();
                build_table(
                    &rows,
                    &breakdown_columns(breakdown.group_key, breakdown.group_label),
                    Some(self.config.header_color.as_str()),
                )
            }
            Err(err) => error_note(&err),
        }
    }

    async fn campaign_table(&self) -> String {
        match self.client.fetch_json::<Vec<CampaignRoi>>("/api/roi/campaigns").await {
            Ok(campaigns) => {
                let rows: Vec<Row> = top_campaigns(campaigns, TOP_CAMPAIGN_LIMIT)
                    .iter()
                    .map(CampaignRoi::to_row)
                    .collect();
                build_table(&rows, &campaign_columns(), Some(self.config.header_color.as_str()))
            }
            Err(err) => error_note(&err),
        }
    }

    fn page(&self, document: &Document, summary: &Summary) -> String {
        let content = |id: &str| document.inner_html(id).unwrap_or_default();

        let mut sections = String::new();
        sections.push_str(&format!(
            "<section class=\"cards\" id=\"{}\">{}</section>\n",
            CARDS_CONTAINER,
            content(CARDS_CONTAINER)
        ));

        for viz in &self.config.visualizations {
            sections.push_str(&section(&viz.title, &viz.container, &content(&viz.container)));
        }
        for breakdown in &BREAKDOWNS {
            sections.push_str(&section(
                breakdown.title,
                breakdown.container,
                &content(breakdown.container),
            ));
        }
        sections.push_str(&section(
            "Top Campaigns by ROI",
            CAMPAIGNS_CONTAINER,
            &content(CAMPAIGNS_CONTAINER),
        ));

        let top_regions = summary
            .top_regions()
            .iter()
            .map(|(country, revenue)| {
                format!("{} ({})", escape_html(country), format_currency(*revenue))
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Marketing ROI Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
    <style>{css}</style>
</head>
<body>
    <header>
        <h1>Marketing ROI Dashboard</h1>
        <p>Top regions: {top_regions}</p>
    </header>
    <main>
{sections}    </main>
    <footer>Generated {generated} from {source}</footer>
</body>
</html>
"#,
            css = page_css(),
            top_regions = top_regions,
            sections = sections,
            generated = Local::now().format("%Y-%m-%d %H:%M:%S"),
            source = escape_html(self.client.base_url()),
        )
    }
}

/// Highest ROI first, at most `limit` campaigns.
pub fn top_campaigns(mut campaigns: Vec<CampaignRoi>, limit: usize) -> Vec<CampaignRoi> {
    campaigns.sort_by(|a, b| b.roi.total_cmp(&a.roi));
    campaigns.truncate(limit);
    campaigns
}

fn render_cards(summary: &Summary) -> String {
    SummaryCards::from(summary)
        .entries()
        .iter()
        .map(|(title, value)| {
            format!(
                r#"<div class="card"><h3>{}</h3><p class="value">{}</p></div>"#,
                title,
                escape_html(value)
            )
        })
        .collect()
}

fn section(title: &str, id: &str, content: &str) -> String {
    format!(
        "<section><h2>{}</h2><div id=\"{}\">{}</div></section>\n",
        escape_html(title),
        escape_html(id),
        content
    )
}

fn error_note(err: &ApiError) -> String {
    format!(r#"<p class="error">{}</p>"#, escape_html(&err.to_string()))
}
