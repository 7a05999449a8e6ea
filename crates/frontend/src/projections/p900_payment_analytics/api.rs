use contracts::projections::p900_payment_analytics::{PaymentAnalytics, PaymentAnalyticsFilters};
use contracts::shared::errors::{AppError, ValidationError};

use crate::shared::api::{envelope, ApiClient};

const ANALYTICS: &str = "/api/admin/users/analytics";

fn endpoint_for(filters: &PaymentAnalyticsFilters) -> Result<String, AppError> {
    let query = filters.to_query_string().map_err(|e| {
        AppError::Validation(ValidationError::new(format!(
            "Filtros de análisis inválidos: {}",
            e
        )))
    })?;
    if query.is_empty() {
        Ok(ANALYTICS.to_string())
    } else {
        Ok(format!("{}?{}", ANALYTICS, query))
    }
}

pub async fn get_payment_analytics(
    client: &ApiClient,
    filters: &PaymentAnalyticsFilters,
) -> Result<PaymentAnalytics, AppError> {
    let response = client.get(&endpoint_for(filters)?).await?;
    let mut analytics: PaymentAnalytics = envelope::success_data(response, "Análisis de pagos")?;
    analytics.pagination = analytics.pagination.map(|p| p.normalized());
    log::debug!(
        "Loaded payment analytics: {} users on page, {} in total",
        analytics.users.len(),
        analytics.statistics.total_users
    );
    Ok(analytics)
}

/// Absolute URL of the CSV download for the given filters.
pub fn export_payment_analytics_url(
    client: &ApiClient,
    filters: &PaymentAnalyticsFilters,
) -> Result<String, AppError> {
    Ok(client.url(&endpoint_for(&filters.for_export())?))
}

/// Opens the CSV download in a new browser tab.
pub fn export_payment_analytics_csv(
    client: &ApiClient,
    filters: &PaymentAnalyticsFilters,
) -> Result<(), AppError> {
    let url = export_payment_analytics_url(client, filters)?;
    client.navigator().open_new_tab(&url);
    log::info!("Exporting payment analytics to CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{Tier, UserState};
    use contracts::projections::p900_payment_analytics::{SortBy, SortOrder};
    use crate::shared::api::testing::{test_client, MockTransport};
    use serde_json::json;

    fn analytics_body() -> serde_json::Value {
        json!({
            "success": true,
            "data": {
                "users": [{
                    "id": 4,
                    "name": "Pedro Rojas",
                    "email": "pedro@pololitos.cl",
                    "state": "OK",
                    "tier": "GOLD",
                    "createdAt": "2024-01-10T10:00:00Z",
                    "availableBalance": 125000,
                    "hasBankAccount": true
                }],
                "statistics": {"totalUsers": 41, "goldTier": 6, "percentWithBank": "73.2"},
                "pagination": {"currentPage": 9, "totalPages": 3, "totalUsers": 41, "limit": 20},
                "filters": {"tier": "GOLD"},
                "sortBy": "balance",
                "sortOrder": "DESC"
            }
        })
    }

    #[tokio::test]
    async fn test_sends_every_defined_filter() {
        let transport = MockTransport::new();
        transport.push_json(200, analytics_body());
        let (client, _, _) = test_client(transport.clone());

        let filters = PaymentAnalyticsFilters {
            tier: Some(Tier::Gold),
            has_bank_account: Some(true),
            page: Some(1),
            limit: Some(20),
            sort_by: Some(SortBy::Balance),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let analytics = get_payment_analytics(&client, &filters).await.unwrap();

        assert_eq!(
            transport.last_endpoint(),
            "/api/admin/users/analytics?hasBankAccount=true&tier=GOLD&page=1&limit=20&sortBy=balance&sortOrder=DESC"
        );
        assert_eq!(analytics.users[0].available_balance, 125000.0);
        assert_eq!(analytics.statistics.tier_count(Tier::Gold), 6);
        let pagination = analytics.pagination.unwrap();
        assert_eq!(pagination.total_count, 41);
        assert_eq!(pagination.current_page, 3);
        assert!(!pagination.has_next_page);
    }

    #[tokio::test]
    async fn test_no_filters_no_query() {
        let transport = MockTransport::new();
        transport.push_json(200, analytics_body());
        let (client, _, _) = test_client(transport.clone());

        get_payment_analytics(&client, &PaymentAnalyticsFilters::default())
            .await
            .unwrap();
        assert_eq!(transport.last_endpoint(), "/api/admin/users/analytics");
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_invalid() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": false}));
        let (client, _, _) = test_client(transport);

        let err = get_payment_analytics(&client, &PaymentAnalyticsFilters::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }

    #[test]
    fn test_export_opens_new_tab() {
        let (client, _, navigator) = test_client(MockTransport::new());
        let filters = PaymentAnalyticsFilters {
            state: Some(UserState::Ok),
            ..Default::default()
        };

        export_payment_analytics_csv(&client, &filters).unwrap();

        assert_eq!(
            navigator.opened(),
            vec!["http://api.test/api/admin/users/analytics?state=OK&export=true".to_string()]
        );
    }
}
