pub mod a001_users;
pub mod a002_support_tickets;
pub mod a003_verification_documents;
pub mod a004_transactions;
