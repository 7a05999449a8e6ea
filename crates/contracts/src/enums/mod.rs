pub mod tier;
pub mod user_state;
pub mod verification_level;

pub use tier::Tier;
pub use user_state::UserState;
pub use verification_level::VerificationLevel;
