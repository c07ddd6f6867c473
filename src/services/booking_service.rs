use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use log::debug;

use crate::{
    db::catalog::Catalog,
    models::{
        booking::{BookingQuery, BookingResult},
        package::Package,
    },
    services::{
        pricing_service::{round_amount, PricingService},
        promo_service::PromoService,
        validation_service::is_submittable,
    },
};

const GUEST_SURCHARGE_THRESHOLD: u32 = 2;
const GUEST_SURCHARGE_MULTIPLIER: f64 = 1.2;
const WEEKEND_SURCHARGE_RATE: f64 = 0.10;

/// Parses a check-in/check-out value. Accepts a plain date as sent by a date
/// input, a local date-time, or RFC 3339.
pub fn parse_stay_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Whole nights between two date strings. Missing, unparseable, same-day
/// and inverted ranges all give zero.
pub fn nights_between(check_in: &str, check_out: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_stay_date(check_in), parse_stay_date(check_out)) else {
        return 0;
    };

    let days = (end - start).num_days();
    if days > 0 {
        u32::try_from(days).unwrap_or(u32::MAX)
    } else {
        0
    }
}

/// Reads a guest count the way a lenient integer parse would: leading
/// whitespace, optional sign, then digits up to the first non-digit.
/// Nothing usable, or a count below one, means a single guest.
pub fn parse_guests(input: &str) -> u32 {
    let text = input.trim_start();
    let (negative, rest) = match text.chars().next() {
        Some('-') => (true, &text[1..]),
        Some('+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return 1;
    }

    let count = digits
        .bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as u32));
    count.max(1)
}

/// True if any of the `nights` days starting at `check_in` is a Saturday or
/// Sunday. The check-out day itself is not a night of the stay.
pub fn stay_includes_weekend(check_in: NaiveDate, nights: u32) -> bool {
    // Seven consecutive days always cover a weekend
    (0..nights.min(7) as u64)
        .filter_map(|offset| check_in.checked_add_days(Days::new(offset)))
        .any(|day| matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
}

pub struct BookingEstimator;

impl BookingEstimator {
    /// Recomputes the whole estimate from the current form values.
    pub fn estimate(catalog: &Catalog, query: &BookingQuery) -> BookingResult {
        let nights = nights_between(&query.check_in, &query.check_out);
        let package = query.package_id.as_deref().and_then(|id| catalog.find(id));
        let submittable = is_submittable(&query.full_name, &query.email, nights, package.is_some());

        let Some(package) = package else {
            debug!("Estimate without a package: nights={}", nights);
            return BookingResult {
                nights,
                effective_nights: nights,
                subtotal: None,
                total: None,
                guest_surcharge_applied: false,
                weekend_surcharge_applied: false,
                promo_applied: None,
                submittable,
            };
        };

        let effective_nights = Self::effective_nights(nights, package);
        let guests = parse_guests(&query.guests);

        let mut subtotal = package.base_price as f64
            * effective_nights as f64
            * PricingService::season_multiplier(package.season);

        let guest_surcharge_applied = guests > GUEST_SURCHARGE_THRESHOLD;
        if guest_surcharge_applied {
            subtotal *= GUEST_SURCHARGE_MULTIPLIER;
        }

        // Only real dates are scanned; the package fallback never counts
        let weekend_surcharge_applied = nights > 0
            && parse_stay_date(&query.check_in)
                .map(|start| stay_includes_weekend(start.date(), nights))
                .unwrap_or(false);
        if weekend_surcharge_applied {
            subtotal += subtotal * WEEKEND_SURCHARGE_RATE;
        }

        let subtotal = round_amount(subtotal);
        let (total, promo_applied) = PromoService::apply(subtotal, &query.promo);

        debug!(
            "Estimate for {}: nights={} effective={} guests={} subtotal={} promo={} total={}",
            package.id,
            nights,
            effective_nights,
            guests,
            subtotal,
            promo_applied.map(|p| p.as_str()).unwrap_or("none"),
            total
        );

        BookingResult {
            nights,
            effective_nights,
            subtotal: Some(subtotal),
            total: Some(total),
            guest_surcharge_applied,
            weekend_surcharge_applied,
            promo_applied,
            submittable,
        }
    }

    /// Night count used for pricing: the real stay if there is one, else the
    /// package's own duration.
    pub fn effective_nights(nights: u32, package: &Package) -> u32 {
        if nights > 0 {
            nights
        } else {
            package.duration_days
        }
    }
}
