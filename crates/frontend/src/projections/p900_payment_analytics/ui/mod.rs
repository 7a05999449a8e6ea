pub mod list;

pub use list::PaymentAnalyticsTab;
