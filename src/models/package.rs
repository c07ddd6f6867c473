use serde::{Deserialize, Serialize};

/// Pricing tier of a package. Anything outside the three known tiers
/// deserializes to `Unspecified` and prices neutrally.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Peak,
    Shoulder,
    Off,
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Package {
    pub id: String,
    pub destination: String,
    /// Nights included in the package.
    pub duration_days: u32,
    /// Price per night.
    pub base_price: u64,
    pub season: Season,
}

impl Package {
    pub fn new(
        id: &str,
        destination: &str,
        duration_days: u32,
        base_price: u64,
        season: Season,
    ) -> Self {
        Self {
            id: id.to_string(),
            destination: destination.to_string(),
            duration_days,
            base_price,
            season,
        }
    }
}

/// One row of the rendered catalog table.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PackageRow {
    pub id: String,
    pub destination: String,
    pub duration_days: u32,
    pub base_price: u64,
    pub base_price_display: String,
    pub season: Season,
    pub final_price: u64,
    pub final_price_display: String,
}

/// An entry of the package picker on the booking form.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PackageOption {
    pub value: String,
    pub label: String,
    pub base_price: u64,
    pub duration_days: u32,
    pub season: Season,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_deserializes_unknown_as_unspecified() {
        let season: Season = serde_json::from_str("\"monsoon\"").unwrap();
        assert_eq!(season, Season::Unspecified);

        let season: Season = serde_json::from_str("\"peak\"").unwrap();
        assert_eq!(season, Season::Peak);
    }

    #[test]
    fn test_package_serializes_lowercase_season() {
        let pkg = Package::new("P001", "Goa", 5, 4000, Season::Peak);
        let value = serde_json::to_value(&pkg).unwrap();
        assert_eq!(value["season"], "peak");
        assert_eq!(value["duration_days"], 5);
    }
}
