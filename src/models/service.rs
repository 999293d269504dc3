use serde::{Deserialize, Serialize};

/// Service tier offered by the wash. Unrecognized keys fall back to
/// `Basic` rather than erroring, matching the booking form behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Basic,
    Deluxe,
    Royal,
}

impl ServiceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Basic => "basic",
            ServiceTier::Deluxe => "deluxe",
            ServiceTier::Royal => "royal",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "deluxe" => ServiceTier::Deluxe,
            "royal" => ServiceTier::Royal,
            _ => ServiceTier::Basic,
        }
    }
}
