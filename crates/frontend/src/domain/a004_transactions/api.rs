use chrono::Utc;
use contracts::domain::a004_transactions::{
    PlatformBalance, RecentTransactionsQuery, StatsRange, Transaction, TransactionStats,
    DEFAULT_TRANSACTIONS_LIMIT,
};
use contracts::shared::errors::AppError;
use contracts::shared::query::QueryParams;

use crate::shared::api::{envelope, ApiClient};

const TRANSACTIONS: &str = "/api/admin/transactions";

/// Stats of the `days` days ending now
pub async fn get_stats(client: &ApiClient, days: i64) -> Result<TransactionStats, AppError> {
    get_stats_in(client, StatsRange::last_days(days, Utc::now())).await
}

pub async fn get_stats_in(client: &ApiClient, range: StatsRange) -> Result<TransactionStats, AppError> {
    let endpoint = range.to_query().append_to(&format!("{}/stats", TRANSACTIONS));
    let response = client.get(&endpoint).await?;
    envelope::required(response, "Estadísticas de transacciones")
}

pub async fn get_recent_transactions(
    client: &ApiClient,
    query: RecentTransactionsQuery,
) -> Result<Vec<Transaction>, AppError> {
    let endpoint = query.to_query().append_to(&format!("{}/recent", TRANSACTIONS));
    let response = client.get(&endpoint).await?;
    envelope::or_default(response, "Transacciones recientes")
}

pub async fn get_task_transactions(client: &ApiClient, task_id: i64) -> Result<Vec<Transaction>, AppError> {
    let response = client
        .get(&format!("{}/task/{}", TRANSACTIONS, task_id))
        .await?;
    envelope::or_default(response, "Transacciones de la tarea")
}

pub async fn get_user_transactions(
    client: &ApiClient,
    user_id: i64,
    limit: Option<u32>,
) -> Result<Vec<Transaction>, AppError> {
    let mut q = QueryParams::new();
    q.push("limit", limit.unwrap_or(DEFAULT_TRANSACTIONS_LIMIT));
    let response = client
        .get(&q.append_to(&format!("{}/user/{}", TRANSACTIONS, user_id)))
        .await?;
    envelope::or_default(response, "Transacciones del usuario")
}

/// All balances are zero when the server has nothing to report
pub async fn get_platform_balance(client: &ApiClient) -> Result<PlatformBalance, AppError> {
    let response = client
        .get(&format!("{}/platform-balance", TRANSACTIONS))
        .await?;
    envelope::or_default(response, "Balance de la plataforma")
}
