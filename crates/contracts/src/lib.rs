//! Wire model shared by the Pololitos admin frontend.
//!
//! Everything here mirrors a payload of the remote admin API: request bodies,
//! response records, list filters and the error taxonomy the client returns.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
