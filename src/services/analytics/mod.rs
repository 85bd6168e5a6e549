// Analytics service
// Read-only metrics fetched from the analytics API, consumed by chart views

pub mod config;
pub mod fetcher;

pub use config::AnalyticsConfig;
pub use fetcher::{AnalyticsService, HttpTransport, Transport};

use serde::{Deserialize, Serialize};

use crate::models::post::Platform;

/// Supported reporting windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsRange {
    Days7,
    Days30,
}

impl MetricsRange {
    pub fn days(&self) -> u32 {
        match self {
            MetricsRange::Days7 => 7,
            MetricsRange::Days30 => 30,
        }
    }
}

/// One day of aggregated metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPoint {
    pub date: String,
    pub impressions: u64,
    pub reach: u64,
    pub engagement: u64,
    #[serde(default)]
    pub followers: u64,
}

/// Overview metrics for a platform over a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub platform: Platform,
    pub days: u32,
    pub metrics: Vec<MetricPoint>,
}

/// Per-post performance entry for the top-posts list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPerformance {
    pub post_id: String,
    #[serde(default)]
    pub title: String,
    pub impressions: u64,
    pub engagement: u64,
    #[serde(default)]
    pub clicks: u64,
}
