use actix_web::{middleware::Logger, web, App};
use actix_cors::Cors;
use std::sync::Arc;

use travel_booking_api::{
    config::AppConfig,
    db::catalog::{create_catalog, Catalog},
    routes,
};

pub struct TestApp {
    pub catalog: Arc<Catalog>,
    pub config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            catalog: create_catalog(),
            config: AppConfig::default(),
        }
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: AppConfig::default(),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub fn booking_form(package_id: &str, check_in: &str, check_out: &str) -> serde_json::Value {
    serde_json::json!({
        "package_id": package_id,
        "check_in": check_in,
        "check_out": check_out,
        "guests": "1",
        "promo": "",
        "full_name": get_test_name(),
        "email": get_test_email(),
    })
}

pub fn get_test_name() -> String {
    "Asha Rao".to_string()
}

pub fn get_test_email() -> String {
    "asha@example.com".to_string()
}
