//! Aggregate statistics for the landing view.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MethodCount};
use crate::credits::Credits;
use crate::endpoint::{BadgeTone, HttpMethod};

/// One bar of the method distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodShare {
    pub method: String,
    pub count: usize,
    pub tone: BadgeTone,
    /// `count / total * 100`; zero when the catalog is empty.
    pub percentage: f64,
    /// Percentage rounded to a whole number, e.g. `"86%"`.
    pub label: String,
}

/// Everything the dashboard view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_endpoints: usize,
    pub categories: usize,
    pub method_breakdown: Vec<MethodShare>,
    pub credits: Credits,
}

impl DashboardStats {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            total_endpoints: catalog.len(),
            categories: catalog.categories().len(),
            method_breakdown: method_shares(catalog.len(), &catalog.method_breakdown()),
            credits: Credits::from_catalog(catalog),
        }
    }
}

/// Converts raw method counts into chart rows.
#[must_use]
pub fn method_shares(total_endpoints: usize, breakdown: &[MethodCount]) -> Vec<MethodShare> {
    breakdown
        .iter()
        .map(|item| {
            let percentage = percentage_of(item.count, total_endpoints);
            MethodShare {
                method: item.method.clone(),
                count: item.count,
                tone: HttpMethod::from(item.method.as_str()).tone(),
                percentage,
                label: format_percentage(percentage),
            }
        })
        .collect()
}

#[must_use]
pub fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss, reason = "catalog sizes are tiny")]
    let ratio = count as f64 / total as f64;
    ratio * 100.0
}

/// Whole-number percentage label, rounding half away from zero.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.0}%", percentage.round())
}
