//! Tab components for the user details page

mod activity;
mod info;
mod tasks;
mod transactions;
mod verification;

pub use activity::ActivityTab;
pub use info::InfoTab;
pub use tasks::TasksTab;
pub use transactions::TransactionsTab;
pub use verification::VerificationTab;
