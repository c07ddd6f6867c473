use crate::models::promo::PromoCode;

pub struct PromoService;

impl PromoService {
    /// Applies a free-text promo code to a rounded total. Unknown or blank
    /// codes leave the total unchanged.
    pub fn apply(total: u64, code: &str) -> (u64, Option<PromoCode>) {
        match PromoCode::parse(code) {
            Some(promo) => (Self::discount(total, promo), Some(promo)),
            None => (total, None),
        }
    }

    /// EARLYBIRD rounds the discounted amount down, SUMMER rounds to nearest
    /// (halves up).
    pub fn discount(total: u64, promo: PromoCode) -> u64 {
        let kept = 100 - promo.discount_percent();
        match promo {
            PromoCode::EarlyBird => total * kept / 100,
            PromoCode::Summer => (total * kept + 50) / 100,
        }
    }
}
