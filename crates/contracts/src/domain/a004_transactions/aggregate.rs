use serde::{Deserialize, Serialize};

/// Money movement recorded by the payments ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub offer_id: Option<i64>,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub gross_amount: f64,
    pub platform_fee: f64,
    pub net_amount: f64,
    #[serde(default)]
    pub platform_fee_percentage: f64,
    pub status: String,
    #[serde(default)]
    pub payment_provider: Option<String>,
    #[serde(default)]
    pub provider_transaction_id: Option<String>,
    #[serde(default)]
    pub applied_tier_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub task_title: Option<String>,
}

impl Transaction {
    pub fn type_label(&self) -> &str {
        transaction_type_label(&self.transaction_type)
    }

    pub fn status_label(&self) -> &str {
        match self.status.as_str() {
            "COMPLETED" => "Completada",
            "PENDING" => "Pendiente",
            "HELD" => "Retenida",
            "FAILED" => "Fallida",
            "REFUNDED" => "Reembolsada",
            "CANCELLED" => "Cancelada",
            other => other,
        }
    }
}

/// Spanish label of a ledger movement type; unknown types are shown raw.
pub fn transaction_type_label(code: &str) -> &str {
    match code {
        "PAYMENT" => "Pago",
        "TASK_PAYMENT" => "Pago de tarea",
        "PAYOUT" => "Retiro",
        "WITHDRAWAL" => "Retiro",
        "REFUND" => "Reembolso",
        "FEE" => "Comisión",
        "ESCROW_HOLD" => "Retención",
        "ESCROW_RELEASE" => "Liberación",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub count: u64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFees {
    pub month: String,
    pub fees: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTransactions {
    pub date: String,
    pub count: u64,
    pub amount: f64,
}

/// Ledger summary over a date range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionStats {
    pub total_transactions: u64,
    pub active_users: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,

    pub total_paid_to_workers: f64,
    pub total_fees_collected: f64,
    pub period_fees_collected: f64,
    /// Amount currently held in escrow
    pub held_amount: f64,
    pub total_refunds: f64,

    pub by_type: Vec<TypeBreakdown>,
    pub monthly_fees: Vec<MonthlyFees>,
    pub daily_transactions: Vec<DailyTransactions>,
}

impl TransactionStats {
    /// Largest monthly fee, used to scale fee bars.
    pub fn max_monthly_fee(&self) -> f64 {
        self.monthly_fees
            .iter()
            .map(|m| m.fees)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformBalance {
    pub total_available: f64,
    pub total_pending: f64,
    pub total_earnings: f64,
    pub escrow_balance: f64,
}
