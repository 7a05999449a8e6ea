use contracts::dashboards::d401_analytics::AnalyticsData;
use contracts::shared::errors::AppError;

use crate::shared::api::{envelope, ApiClient};

/// Platform analytics for the last `period` days
pub async fn get_stats(client: &ApiClient, period: u32) -> Result<AnalyticsData, AppError> {
    let response = client
        .get(&format!("/api/admin/analytics/stats?period={}", period))
        .await?;
    envelope::required(response, "Estadísticas de analytics")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{test_client, MockTransport};
    use contracts::dashboards::d401_analytics::DEFAULT_PERIOD_DAYS;
    use serde_json::json;

    #[tokio::test]
    async fn test_period_in_query() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({
                "summary": {"totalUsers": 300, "newUsers": 25, "periodRevenue": 90000},
                "charts": {"tasksByCategory": [{"category": "Limpieza", "count": 12}]}
            }),
        );
        let (client, _, _) = test_client(transport.clone());

        let data = get_stats(&client, DEFAULT_PERIOD_DAYS).await.unwrap();

        assert_eq!(transport.last_endpoint(), "/api/admin/analytics/stats?period=30");
        assert_eq!(data.summary.new_users, 25);
        assert_eq!(data.charts.tasks_by_category[0].count, 12);
        assert!(data.charts.monthly_revenue.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let transport = MockTransport::new();
        transport.push_json(500, json!({"error": "Fallo interno"}));
        let (client, _, _) = test_client(transport);

        let err = get_stats(&client, 90).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.is_recoverable());
    }
}
