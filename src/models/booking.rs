use serde::{Deserialize, Deserializer, Serialize};

use crate::models::promo::PromoCode;

/// Raw booking form values, exactly as the client holds them. Nothing here
/// is validated; the estimator degrades bad values to safe defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct BookingQuery {
    pub package_id: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub check_in: String,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub check_out: String,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub guests: String,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub promo: String,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub full_name: String,
    #[serde(deserialize_with = "deserialize_lenient_text")]
    pub email: String,
}

// Form fields may arrive as JSON strings, numbers or null
fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        _ => Ok(String::new()),
    }
}

/// Outcome of one estimator run. Amounts are absent when no package is
/// selected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingResult {
    pub nights: u32,
    pub effective_nights: u32,
    pub subtotal: Option<u64>,
    pub total: Option<u64>,
    pub guest_surcharge_applied: bool,
    pub weekend_surcharge_applied: bool,
    pub promo_applied: Option<PromoCode>,
    pub submittable: bool,
}

/// Estimate as returned to the booking form.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingView {
    pub package_selected: bool,
    pub nights: u32,
    pub effective_nights: u32,
    pub subtotal: Option<u64>,
    pub total: Option<u64>,
    pub subtotal_display: Option<String>,
    pub total_display: Option<String>,
    pub guest_surcharge_applied: bool,
    pub weekend_surcharge_applied: bool,
    pub promo_applied: Option<PromoCode>,
    pub submittable: bool,
}
