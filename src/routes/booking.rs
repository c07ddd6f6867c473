use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::{
    db::catalog::Catalog,
    models::booking::{BookingQuery, BookingResult, BookingView},
    services::{booking_service::BookingEstimator, currency_service::format_inr},
};

/// Shapes an estimator result for the booking form.
pub fn to_view(result: &BookingResult) -> BookingView {
    BookingView {
        package_selected: result.subtotal.is_some(),
        nights: result.nights,
        effective_nights: result.effective_nights,
        subtotal: result.subtotal,
        total: result.total,
        subtotal_display: result.subtotal.map(format_inr),
        total_display: result.total.map(format_inr),
        guest_surcharge_applied: result.guest_surcharge_applied,
        weekend_surcharge_applied: result.weekend_surcharge_applied,
        promo_applied: result.promo_applied,
        submittable: result.submittable,
    }
}

/*
    /api/bookings/estimate
    Called on every form change; each call recomputes from scratch.
*/
pub async fn estimate(
    data: web::Data<Arc<Catalog>>,
    input: web::Json<BookingQuery>,
) -> impl Responder {
    let query = input.into_inner();
    let result = BookingEstimator::estimate(&data, &query);
    HttpResponse::Ok().json(to_view(&result))
}
