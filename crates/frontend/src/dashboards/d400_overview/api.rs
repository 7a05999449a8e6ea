use contracts::dashboards::d400_overview::DashboardStats;
use contracts::shared::errors::AppError;

use crate::shared::api::{envelope, ApiClient};

pub async fn get_stats(client: &ApiClient) -> Result<DashboardStats, AppError> {
    let response = client.get("/api/admin/dashboard/stats").await?;
    let stats: DashboardStats = envelope::required(response, "Estadísticas del panel")?;
    log::debug!(
        "Dashboard stats: {} users, {} tasks, {} activity items",
        stats.total_users,
        stats.total_tasks,
        stats.recent_activity.len()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{json_response, test_client, MockTransport};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_get_stats() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({
                "totalUsers": 1247,
                "totalTasks": 856,
                "totalRevenue": 45230000,
                "pendingVerifications": 23,
                "openTickets": 12,
                "recentActivity": [],
                "trends": {"users": 4.2}
            }),
        );
        let (client, _, _) = test_client(transport.clone());

        let stats = get_stats(&client).await.unwrap();

        assert_eq!(transport.last_endpoint(), "/api/admin/dashboard/stats");
        assert_eq!(stats.open_tickets, 12);
        assert_eq!(stats.trends.users, 4.2);
        assert_eq!(stats.trends.revenue, 0.0);
    }

    #[tokio::test]
    async fn test_missing_body_is_invalid() {
        let transport = MockTransport::new();
        transport.push(json_response(200, Value::Null));
        let (client, _, _) = test_client(transport);

        let err = get_stats(&client).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }
}
