use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::{config::AppConfig, db::catalog::Catalog};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    packages: usize,
}

pub async fn health_check(
    data: web::Data<Arc<Catalog>>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let packages = data.packages().len();
    let health = HealthStatus {
        // Nothing can be priced from an empty catalog
        status: (if packages > 0 { "ok" } else { "degraded" }).to_string(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        packages,
    };

    HttpResponse::Ok().json(health)
}
