use crate::enums::UserState;
use serde::{Deserialize, Serialize};

/// Payout bank account as stored for a worker; the number arrives masked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub nombre_completo: String,
    pub rut: String,
    pub banco: String,
    pub tipo_cuenta: String,
    pub numero_cuenta: String,
    pub numero_cuenta_enmascarado: String,
    #[serde(default)]
    pub numero_cuenta_completo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBalance {
    pub available_balance: f64,
    pub pending_balance: f64,
    pub total_earnings: f64,
    pub total_withdrawn: f64,
    #[serde(default)]
    pub last_transaction_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    pub state: UserState,
    pub created_at: String,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub total_ratings: u32,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub earnings_total: f64,
    #[serde(default)]
    pub earnings_last_30_days: Option<f64>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub verification_level: String,
    #[serde(default)]
    pub identity_verified: bool,
    #[serde(default)]
    pub criminal_record_verified: bool,
    #[serde(default)]
    pub address_verified: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
    #[serde(default)]
    pub balance: Option<UserBalance>,
}

impl AdminUser {
    /// Number of the three verification checks this user has passed
    pub fn verified_checks(&self) -> u8 {
        [
            self.identity_verified,
            self.criminal_record_verified,
            self.address_verified,
        ]
        .iter()
        .filter(|v| **v)
        .count() as u8
    }

    pub fn is_fully_verified(&self) -> bool {
        self.verified_checks() == 3
    }
}

/// Worker with money waiting to be paid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayoutUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub earnings_total: f64,
    pub earnings_last_30_days: f64,
    pub tier: String,
    pub available_balance: f64,
    pub pending_balance: f64,
    pub total_earnings: f64,
    pub total_withdrawn: f64,
    pub has_bank_account: bool,
    #[serde(default)]
    pub bank_account_holder: Option<String>,
    pub state: String,
}

impl PendingPayoutUser {
    /// A payout can only be executed to a registered bank account of an active user
    pub fn can_be_paid(&self) -> bool {
        self.has_bank_account && self.state == UserState::Ok.code() && self.available_balance > 0.0
    }
}

/// Task seen from the user's side, either as client or as worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTask {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub budget: f64,
    #[serde(default)]
    pub original_budget: Option<f64>,
    pub payment_status: String,
    #[serde(default)]
    pub completed: Option<String>,
    #[serde(default)]
    pub cancelled: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub completion_rating: Option<f64>,
    #[serde(default)]
    pub completion_feedback: Option<String>,
    #[serde(default)]
    pub when_mode: String,
    #[serde(default)]
    pub when_date: Option<String>,
    #[serde(default)]
    pub location_mode: String,
    #[serde(default)]
    pub location_name: Option<String>,

    #[serde(default)]
    pub worker_id: Option<i64>,
    #[serde(default)]
    pub worker_name: Option<String>,
    #[serde(default)]
    pub worker_profile_picture: Option<String>,
    #[serde(default)]
    pub worker_rating: Option<f64>,
    #[serde(default)]
    pub worker_total_tasks: Option<u32>,

    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_profile_picture: Option<String>,
    #[serde(default)]
    pub client_rating: Option<f64>,

    #[serde(default)]
    pub offer_id: Option<i64>,
    #[serde(default)]
    pub offer_amount: Option<f64>,
    #[serde(default)]
    pub offer_status: Option<String>,
    #[serde(default)]
    pub offer_created_at: Option<String>,
    #[serde(default)]
    pub platform_fee: Option<f64>,
    #[serde(default)]
    pub net_amount: Option<f64>,
    #[serde(default)]
    pub total_offers: Option<u32>,

    #[serde(default)]
    pub transaction_id: Option<i64>,
    #[serde(default)]
    pub transaction_status: Option<String>,
    #[serde(default)]
    pub earned_amount: Option<f64>,
    #[serde(default)]
    pub payment_completed_at: Option<String>,
}

impl UserTask {
    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTaskStats {
    pub total_as_client: u32,
    pub total_as_worker: u32,
    pub completed_as_worker: u32,
    pub active_as_worker: u32,
    pub cancelled_as_client: u32,
    pub total_earnings_as_worker: f64,
    pub total_spent_as_client: f64,
}

/// Timeline event of a user (payment, task, offer, tier change...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub activity_type: String,
    pub activity_id: i64,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub net_amount: Option<f64>,
    #[serde(default)]
    pub platform_fee: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub task_title: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completion_rating: Option<f64>,
    #[serde(default)]
    pub completion_feedback: Option<String>,
    #[serde(default)]
    pub offer_count: Option<u32>,
}
