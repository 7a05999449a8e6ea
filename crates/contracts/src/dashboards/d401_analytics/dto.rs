use serde::{Deserialize, Serialize};

pub const DEFAULT_PERIOD_DAYS: u32 = 30;

/// Periods offered by the analytics selector, in days
pub const PERIOD_OPTIONS: [u32; 4] = [7, 30, 90, 365];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSummary {
    pub total_users: u64,
    pub new_users: u64,
    pub verified_users: u64,
    pub total_tasks: u64,
    pub new_tasks: u64,
    pub total_revenue: f64,
    pub period_revenue: f64,
    pub held_money: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    pub category: String,
    pub count: u64,
}

/// One month of a series; only the field matching the series is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyData {
    pub month: String,
    #[serde(default)]
    pub users: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub tasks: Option<f64>,
}

impl MonthlyData {
    pub fn value(&self) -> f64 {
        self.users.or(self.revenue).or(self.tasks).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsCharts {
    pub tasks_by_category: Vec<CategoryData>,
    pub monthly_users: Vec<MonthlyData>,
    pub monthly_revenue: Vec<MonthlyData>,
    pub monthly_tasks: Vec<MonthlyData>,
}

/// Response of `GET /api/admin/analytics/stats?period=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsData {
    pub summary: AnalyticsSummary,
    pub charts: AnalyticsCharts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_value() {
        let json = r#"{"summary": {"totalUsers": 10}, "charts": {"monthlyRevenue": [{"month": "2024-03", "revenue": 5000}], "monthlyUsers": [{"month": "2024-03"}]}}"#;
        let data: AnalyticsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.summary.total_users, 10);
        assert_eq!(data.charts.monthly_revenue[0].value(), 5000.0);
        assert_eq!(data.charts.monthly_users[0].value(), 0.0);
        assert!(data.charts.tasks_by_category.is_empty());
    }
}
