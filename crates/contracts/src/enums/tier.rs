use crate::shared::query::QueryValue;
use serde::{Deserialize, Serialize};

/// Commission tier, computed server-side from a worker's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub fn code(&self) -> &'static str {
        match self {
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronce",
            Tier::Silver => "Plata",
            Tier::Gold => "Oro",
            Tier::Platinum => "Platino",
        }
    }

    pub fn all() -> Vec<Tier> {
        vec![Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum]
    }

    /// Case-insensitive; tiers arrive both as `GOLD` and `Gold` depending on the endpoint.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "BRONZE" => Some(Tier::Bronze),
            "SILVER" => Some(Tier::Silver),
            "GOLD" => Some(Tier::Gold),
            "PLATINUM" => Some(Tier::Platinum),
            _ => None,
        }
    }
}

impl QueryValue for Tier {
    fn code(&self) -> &'static str {
        Tier::code(self)
    }
}

/// Label for a tier string as sent by the server, falling back to the raw value.
pub fn tier_label(raw: &str) -> String {
    Tier::from_code(raw)
        .map(|t| t.display_name().to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_label() {
        assert_eq!(tier_label("GOLD"), "Oro");
        assert_eq!(tier_label("platinum"), "Platino");
        assert_eq!(tier_label("DIAMOND"), "DIAMOND");
    }
}
