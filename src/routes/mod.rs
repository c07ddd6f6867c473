use actix_web::{error::InternalError, web, HttpResponse};
use log::warn;

pub mod booking;
pub mod gallery;
pub mod health;
pub mod packages;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}

/// Registers every route. Shared state (`Arc<Catalog>`, `AppConfig`) is
/// attached by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/packages")
                        .route("", web::get().to(packages::get_all))
                        .route("/options", web::get().to(packages::get_options))
                        .route("/{id}", web::get().to(packages::get_by_id)),
                )
                .route("/gallery", web::get().to(gallery::get_gallery))
                .service(
                    web::scope("/bookings")
                        .route("/estimate", web::post().to(booking::estimate)),
                ),
        );
}
