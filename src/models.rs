// src/models.rs
//! Payloads served by the dashboard's JSON endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Map;
use serde_json::Value;

use crate::data_types::{CellValue, Row};
use crate::format::{format_currency, format_percent};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub success: bool,
}

/// `/api/summary`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Summary {
    pub total_revenue: f64,
    pub total_marketing_spend: f64,
    pub overall_roi: f64,
    pub best_campaign_type: String,
    pub best_campaign_roi: f64,
    /// Country → revenue for the top regions. The server sorts keys
    /// alphabetically, so use [`Summary::top_regions`] for revenue order.
    #[serde(default)]
    pub top_regions: Map<String, Value>,
}

impl Summary {
    /// Top regions, highest revenue first.
    pub fn top_regions(&self) -> Vec<(String, f64)> {
        let mut regions: Vec<(String, f64)> = self
            .top_regions
            .iter()
            .filter_map(|(country, revenue)| revenue.as_f64().map(|r| (country.clone(), r)))
            .collect();
        regions.sort_by(|a, b| b.1.total_cmp(&a.1));
        regions
    }
}

/// One row of `/api/roi/campaigns`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CampaignRoi {
    #[serde(rename = "Campaign_ID")]
    pub campaign_id: Value,
    #[serde(rename = "Campaign_Type")]
    pub campaign_type: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "ProductCategory")]
    pub product_category: String,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "Marketing_Spend")]
    pub marketing_spend: f64,
    #[serde(rename = "ROI")]
    pub roi: f64,
}

impl CampaignRoi {
    pub fn to_row(&self) -> Row {
        let id = match &self.campaign_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Row::from([
            ("Campaign_ID".to_string(), CellValue::Text(id)),
            ("Campaign_Type".to_string(), CellValue::Text(self.campaign_type.clone())),
            ("Country".to_string(), CellValue::Text(self.country.clone())),
            ("ProductCategory".to_string(), CellValue::Text(self.product_category.clone())),
            ("Revenue".to_string(), CellValue::Number(self.revenue)),
            ("Marketing_Spend".to_string(), CellValue::Number(self.marketing_spend)),
            ("ROI".to_string(), CellValue::Number(self.roi)),
        ])
    }
}

/// Display-ready values for the summary cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCards {
    pub total_revenue: String,
    pub total_spend: String,
    pub overall_roi: String,
    pub best_campaign: String,
    pub best_campaign_roi: String,
}

impl From<&Summary> for SummaryCards {
    fn from(summary: &Summary) -> Self {
        SummaryCards {
            total_revenue: format_currency(summary.total_revenue),
            total_spend: format_currency(summary.total_marketing_spend),
            overall_roi: format_percent(summary.overall_roi),
            best_campaign: summary.best_campaign_type.clone(),
            best_campaign_roi: format_percent(summary.best_campaign_roi),
        }
    }
}

impl SummaryCards {
    /// (title, value) pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("Total Revenue", self.total_revenue.as_str()),
            ("Marketing Spend", self.total_spend.as_str()),
            ("Overall ROI", self.overall_roi.as_str()),
            ("Best Campaign Type", self.best_campaign.as_str()),
            ("Best Campaign ROI", self.best_campaign_roi.as_str()),
        ]
    }
}
