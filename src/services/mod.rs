pub mod booking_service;
pub mod currency_service;
pub mod pricing_service;
pub mod promo_service;
pub mod validation_service;
