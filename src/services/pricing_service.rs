use crate::models::package::{Package, Season};

/// Catalog weekend surcharge kicks in at this many days.
const WEEKEND_HEURISTIC_MIN_DAYS: u32 = 5;
const WEEKEND_SURCHARGE_RATE: f64 = 0.10;

const SEASON_MULTIPLIERS: [(Season, f64); 4] = [
    (Season::Peak, 1.25),
    (Season::Shoulder, 1.05),
    (Season::Off, 0.90),
    (Season::Unspecified, 1.0),
];

pub struct PricingService;

impl PricingService {
    /// Multiplier applied to the base total for a season (1.0 when unknown)
    pub fn season_multiplier(season: Season) -> f64 {
        SEASON_MULTIPLIERS
            .iter()
            .find(|(s, _)| *s == season)
            .map(|(_, m)| *m)
            .unwrap_or(1.0)
    }

    /// Duration-based stand-in for weekend detection, used by the catalog
    /// view only. The booking estimator scans real dates instead.
    pub fn duration_weekend_surcharge_rate(duration_days: u32) -> f64 {
        if duration_days >= WEEKEND_HEURISTIC_MIN_DAYS {
            WEEKEND_SURCHARGE_RATE
        } else {
            0.0
        }
    }

    /// Displayed catalog price of a package
    pub fn compute_final_price(pkg: &Package) -> u64 {
        let base_total = pkg.base_price as f64 * pkg.duration_days as f64;
        let after_season = base_total * Self::season_multiplier(pkg.season);
        let rate = Self::duration_weekend_surcharge_rate(pkg.duration_days);

        round_amount(after_season * (1.0 + rate))
    }
}

/// Rounds a non-negative amount to the nearest whole unit, halves away from
/// zero. Negative or NaN amounts clamp to zero.
pub fn round_amount(amount: f64) -> u64 {
    if amount.is_nan() || amount <= 0.0 {
        return 0;
    }
    amount.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_multiplier_table() {
        assert_eq!(PricingService::season_multiplier(Season::Peak), 1.25);
        assert_eq!(PricingService::season_multiplier(Season::Shoulder), 1.05);
        assert_eq!(PricingService::season_multiplier(Season::Off), 0.90);
        assert_eq!(PricingService::season_multiplier(Season::Unspecified), 1.0);
    }

    #[test]
    fn test_duration_weekend_heuristic() {
        assert_eq!(PricingService::duration_weekend_surcharge_rate(4), 0.0);
        assert_eq!(PricingService::duration_weekend_surcharge_rate(5), 0.10);
        assert_eq!(PricingService::duration_weekend_surcharge_rate(12), 0.10);
    }

    #[test]
    fn test_final_price_for_goa() {
        let pkg = Package::new("P001", "Goa", 5, 4000, Season::Peak);
        assert_eq!(PricingService::compute_final_price(&pkg), 27500);
    }

    #[test]
    fn test_final_price_for_full_catalog() {
        let expected = [
            (Package::new("P001", "Goa", 5, 4000, Season::Peak), 27500),
            (Package::new("P002", "Manali", 6, 3500, Season::Shoulder), 24255),
            (Package::new("P003", "Jaipur & Udaipur", 7, 3000, Season::Off), 20790),
            (Package::new("P004", "Andaman", 6, 6000, Season::Peak), 49500),
            (Package::new("P005", "Kerala", 5, 3200, Season::Shoulder), 18480),
        ];
        for (pkg, price) in expected.iter() {
            assert_eq!(PricingService::compute_final_price(pkg), *price, "{}", pkg.id);
        }
    }

    #[test]
    fn test_short_trip_skips_weekend_heuristic() {
        let pkg = Package::new("X", "Pune", 3, 1000, Season::Unspecified);
        assert_eq!(PricingService::compute_final_price(&pkg), 3000);
    }

    #[test]
    fn test_final_price_is_deterministic() {
        let pkg = Package::new("P004", "Andaman", 6, 6000, Season::Peak);
        let first = PricingService::compute_final_price(&pkg);
        for _ in 0..10 {
            assert_eq!(PricingService::compute_final_price(&pkg), first);
        }
    }

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(2.5), 3);
        assert_eq!(round_amount(2.4999), 2);
        assert_eq!(round_amount(-4.0), 0);
        assert_eq!(round_amount(f64::NAN), 0);
    }
}
