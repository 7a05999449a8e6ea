pub mod p900_payment_analytics;
