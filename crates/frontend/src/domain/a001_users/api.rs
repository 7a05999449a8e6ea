use contracts::domain::a001_users::{
    AdminUser, PendingPayoutsResponse, UserActivityQuery, UserActivityResponse, UserFilters,
    UserStatusUpdate, UserTasksQuery, UserTasksResponse, UsersPage, DEFAULT_MIN_PAYOUT_BALANCE,
};
use contracts::shared::errors::AppError;
use contracts::shared::query::{ListFilters, QueryParams};

use crate::shared::api::{envelope, ApiClient};

const USERS: &str = "/api/admin/users";

pub async fn get_all_users(client: &ApiClient, filters: &UserFilters) -> Result<UsersPage, AppError> {
    let endpoint = filters.to_query().append_to(USERS);
    let response = client.get(&endpoint).await?;
    let mut page: UsersPage = envelope::success_data(response, "Listado de usuarios")?;
    page.pagination = page.pagination.normalized();
    log::debug!("Loaded {} users", page.users.len());
    Ok(page)
}

pub async fn get_user_details(client: &ApiClient, user_id: i64) -> Result<AdminUser, AppError> {
    let response = client.get(&format!("{}/{}", USERS, user_id)).await?;
    envelope::success_data(response, "Detalle de usuario")
}

pub async fn get_user_tasks(
    client: &ApiClient,
    user_id: i64,
    query: &UserTasksQuery,
) -> Result<UserTasksResponse, AppError> {
    let endpoint = query.to_query().append_to(&format!("{}/{}/tasks", USERS, user_id));
    let response = client.get(&endpoint).await?;
    envelope::success_body(response, "Tareas del usuario")
}

pub async fn get_user_activity(
    client: &ApiClient,
    user_id: i64,
    query: &UserActivityQuery,
) -> Result<UserActivityResponse, AppError> {
    let endpoint = query.to_query().append_to(&format!("{}/{}/activity", USERS, user_id));
    let response = client.get(&endpoint).await?;
    envelope::success_body(response, "Actividad del usuario")
}

/// Returns the server's confirmation message, if any
pub async fn update_user_status(
    client: &ApiClient,
    user_id: i64,
    update: &UserStatusUpdate,
) -> Result<Option<String>, AppError> {
    let response = client
        .patch(&format!("{}/{}/status", USERS, user_id), update)
        .await?;
    let message = envelope::acknowledged(response, "Cambio de estado")?;
    log::info!("User {} set to {}", user_id, update.status.code());
    Ok(message)
}

/// Workers whose available balance is at least `min_balance`
/// (defaults to [`DEFAULT_MIN_PAYOUT_BALANCE`])
pub async fn get_pending_payouts(
    client: &ApiClient,
    min_balance: Option<f64>,
) -> Result<PendingPayoutsResponse, AppError> {
    let mut q = QueryParams::new();
    q.push("minBalance", min_balance.unwrap_or(DEFAULT_MIN_PAYOUT_BALANCE));
    let response = client
        .get(&q.append_to(&format!("{}/pending-payouts", USERS)))
        .await?;
    envelope::success_body(response, "Pagos pendientes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{test_client, MockTransport};
    use crate::shared::api::transport::Method;
    use contracts::enums::UserState;
    use contracts::shared::query::Choice;
    use serde_json::{json, Value};

    fn user_json(id: i64, state: &str) -> Value {
        json!({
            "id": id,
            "name": "Ana Pérez",
            "email": "ana@pololitos.cl",
            "state": state,
            "createdAt": "2024-01-10T10:00:00Z",
            "totalTasks": 4,
            "averageRating": 4.5,
            "earningsTotal": 120000,
            "verificationLevel": "BASIC",
            "identityVerified": true
        })
    }

    fn users_body(users: Vec<Value>, pagination: Value) -> Value {
        json!({"success": true, "data": {"users": users, "pagination": pagination}})
    }

    #[tokio::test]
    async fn test_blocked_users_first_page() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            users_body(
                vec![user_json(7, "BLOCKED")],
                json!({"currentPage": 1, "totalPages": 1, "totalUsers": 1, "limit": 20, "hasNextPage": false, "hasPrevPage": false}),
            ),
        );
        let (client, _, _) = test_client(transport.clone());

        let filters = UserFilters {
            status: Choice::Only(UserState::Blocked),
            page: Some(1),
            limit: Some(20),
            ..Default::default()
        };
        let page = get_all_users(&client, &filters).await.unwrap();

        assert_eq!(transport.last_endpoint(), "/api/admin/users?status=BLOCKED&page=1&limit=20");
        assert_eq!(page.users[0].state, UserState::Blocked);
    }

    #[tokio::test]
    async fn test_all_status_is_not_sent() {
        let transport = MockTransport::new();
        transport.push_json(200, users_body(vec![], json!({})));
        let (client, _, _) = test_client(transport.clone());

        let filters = UserFilters {
            search: Some("".to_string()),
            ..Default::default()
        };
        get_all_users(&client, &filters).await.unwrap();

        assert_eq!(transport.last_endpoint(), "/api/admin/users");
    }

    #[tokio::test]
    async fn test_pagination_is_normalized() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            users_body(
                vec![],
                json!({"currentPage": 5, "totalPages": 0, "totalUsers": 0, "limit": 20, "hasNextPage": true, "hasPrevPage": true}),
            ),
        );
        let (client, _, _) = test_client(transport);

        let page = get_all_users(&client, &UserFilters::default()).await.unwrap();

        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);
    }

    #[tokio::test]
    async fn test_details_are_not_cached() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "data": user_json(3, "OK")}));
        transport.push_json(200, json!({"success": true, "data": user_json(3, "OK")}));
        let (client, _, _) = test_client(transport.clone());

        let first = get_user_details(&client, 3).await.unwrap();
        let second = get_user_details(&client, 3).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_status_change_then_reload() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"success": true, "message": "Estado actualizado"}));
        transport.push_json(
            200,
            users_body(vec![user_json(9, "DISABLED")], json!({"currentPage": 1, "totalPages": 1})),
        );
        let (client, _, _) = test_client(transport.clone());

        let update = UserStatusUpdate {
            status: UserState::Disabled,
            reason: Some("Fraude".to_string()),
        };
        let message = update_user_status(&client, 9, &update).await.unwrap();
        assert_eq!(message.as_deref(), Some("Estado actualizado"));

        let patch = &transport.requests()[0];
        assert_eq!(patch.method, Method::Patch);
        assert!(patch.url.ends_with("/api/admin/users/9/status"));
        assert_eq!(
            serde_json::from_str::<Value>(patch.body.as_deref().unwrap()).unwrap(),
            json!({"status": "DISABLED", "reason": "Fraude"})
        );

        let page = get_all_users(&client, &UserFilters::default()).await.unwrap();
        let user = page.users.iter().find(|u| u.id == 9).unwrap();
        assert_eq!(user.state, UserState::Disabled);
    }

    #[tokio::test]
    async fn test_pending_payouts_default_min_balance() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({"success": true, "data": [], "count": 0, "filters": {"minBalance": 1000}}),
        );
        let (client, _, _) = test_client(transport.clone());

        let response = get_pending_payouts(&client, None).await.unwrap();

        assert_eq!(transport.last_endpoint(), "/api/admin/users/pending-payouts?minBalance=1000");
        assert_eq!(response.count, 0);
    }

    #[tokio::test]
    async fn test_tasks_query_and_envelope() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            json!({"success": true, "data": {"asClient": [], "asWorker": [], "stats": {
                "totalAsClient": 0, "totalAsWorker": 2, "completedAsWorker": 1, "activeAsWorker": 1,
                "cancelledAsClient": 0, "totalEarningsAsWorker": 50000, "totalSpentAsClient": 0
            }}}),
        );
        transport.push_json(200, json!({"success": false}));
        let (client, _, _) = test_client(transport.clone());

        let query = UserTasksQuery {
            limit: Some(20),
            ..Default::default()
        };
        let tasks = get_user_tasks(&client, 5, &query).await.unwrap();
        assert_eq!(transport.last_endpoint(), "/api/admin/users/5/tasks?limit=20");
        assert_eq!(tasks.data.stats.completed_as_worker, 1);

        let err = get_user_activity(&client, 5, &UserActivityQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }
}
