use serde::{Deserialize, Serialize};

/// Recognized promotional codes.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum PromoCode {
    #[serde(rename = "EARLYBIRD")]
    EarlyBird,
    #[serde(rename = "SUMMER")]
    Summer,
}

impl PromoCode {
    /// Matches free text against the known codes, ignoring case and
    /// surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "EARLYBIRD" => Some(PromoCode::EarlyBird),
            "SUMMER" => Some(PromoCode::Summer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromoCode::EarlyBird => "EARLYBIRD",
            PromoCode::Summer => "SUMMER",
        }
    }

    /// Discount in whole percent.
    pub fn discount_percent(&self) -> u64 {
        match self {
            PromoCode::EarlyBird => 10,
            PromoCode::Summer => 5,
        }
    }
}
