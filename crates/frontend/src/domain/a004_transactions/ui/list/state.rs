use contracts::domain::a004_transactions::{
    PlatformBalance, RecentTransactionsQuery, Transaction, TransactionStats, DEFAULT_STATS_DAYS,
    DEFAULT_TRANSACTIONS_LIMIT,
};
use leptos::prelude::*;

use crate::shared::components::bar_chart::BarDatum;
use crate::shared::components::table::number_format::{format_clp, format_count};
use crate::shared::date_utils::format_month;
use crate::shared::load_state::LoadState;

pub const PERIOD_OPTIONS: [i64; 4] = [7, 30, 90, 365];

#[derive(Clone, Debug)]
pub struct TransactionsState {
    pub period_days: i64,
    pub stats: LoadState<TransactionStats>,
    pub balance: LoadState<PlatformBalance>,
    pub recent: LoadState<Vec<Transaction>>,
    pub recent_query: RecentTransactionsQuery,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self {
            period_days: DEFAULT_STATS_DAYS,
            stats: LoadState::Idle,
            balance: LoadState::Idle,
            recent: LoadState::Idle,
            recent_query: RecentTransactionsQuery::default(),
        }
    }
}

impl TransactionsState {
    /// 1-based page of the recent transactions table
    pub fn recent_page(&self) -> u32 {
        self.recent_query.offset / self.recent_query.limit.max(1) + 1
    }

    /// A full page means there may be more rows on the server
    pub fn has_more_recent(&self) -> bool {
        self.recent
            .ready()
            .map(|rows| rows.len() as u32 >= self.recent_query.limit)
            .unwrap_or(false)
    }

    pub fn go_to_recent_page(&mut self, page: u32) {
        let limit = self.recent_query.limit.max(1);
        self.recent_query.offset = page.saturating_sub(1) * limit;
    }
}

pub fn period_label(days: i64) -> String {
    match days {
        365 => "Último año".to_string(),
        d => format!("Últimos {} días", d),
    }
}

/// One bar per movement type, sized by total amount
pub fn type_bars(stats: &TransactionStats) -> Vec<BarDatum> {
    stats
        .by_type
        .iter()
        .map(|t| BarDatum {
            label: contracts::domain::a004_transactions::transaction_type_label(&t.transaction_type)
                .to_string(),
            value: t.total,
            display: format!("{} ({})", format_clp(t.total), format_count(t.count)),
        })
        .collect()
}

/// Fees collected per month, oldest first
pub fn fee_bars(stats: &TransactionStats) -> Vec<BarDatum> {
    let mut months = stats.monthly_fees.clone();
    months.sort_by(|a, b| a.month.cmp(&b.month));
    months
        .into_iter()
        .map(|m| BarDatum {
            label: format_month(&m.month),
            value: m.fees,
            display: format_clp(m.fees),
        })
        .collect()
}

pub fn default_limit() -> u32 {
    DEFAULT_TRANSACTIONS_LIMIT
}

pub fn create_state() -> RwSignal<TransactionsState> {
    RwSignal::new(TransactionsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_transactions::{MonthlyFees, TypeBreakdown};

    #[test]
    fn test_fee_bars_sorted_by_month() {
        let stats = TransactionStats {
            monthly_fees: vec![
                MonthlyFees { month: "2024-03".to_string(), fees: 3000.0, count: 3 },
                MonthlyFees { month: "2024-01".to_string(), fees: 1000.0, count: 1 },
            ],
            ..Default::default()
        };
        let bars = fee_bars(&stats);
        assert_eq!(bars[0].label, "ene 2024");
        assert_eq!(bars[1].display, "$3.000");
    }

    #[test]
    fn test_type_bars_labels() {
        let stats = TransactionStats {
            by_type: vec![TypeBreakdown {
                transaction_type: "REFUND".to_string(),
                count: 1200,
                total: 50000.0,
            }],
            ..Default::default()
        };
        let bars = type_bars(&stats);
        assert_eq!(bars[0].label, "Reembolso");
        assert_eq!(bars[0].display, "$50.000 (1.200)");
    }

    #[test]
    fn test_recent_paging() {
        let mut state = TransactionsState::default();
        assert_eq!(state.recent_page(), 1);
        state.go_to_recent_page(3);
        assert_eq!(state.recent_query.offset, 100);
        assert_eq!(state.recent_page(), 3);
        assert!(!state.has_more_recent());
    }
}
