use actix_web::{web, HttpResponse, Responder};
use log::warn;
use std::sync::Arc;

use crate::{
    db::catalog::Catalog,
    models::package::{Package, PackageOption, PackageRow},
    services::{
        currency_service::{format_inr, format_rupees},
        pricing_service::PricingService,
    },
};

fn to_row(pkg: &Package) -> PackageRow {
    let final_price = PricingService::compute_final_price(pkg);
    PackageRow {
        id: pkg.id.clone(),
        destination: pkg.destination.clone(),
        duration_days: pkg.duration_days,
        base_price: pkg.base_price,
        base_price_display: format_rupees(pkg.base_price),
        season: pkg.season,
        final_price,
        final_price_display: format_rupees(final_price),
    }
}

fn to_option(pkg: &Package) -> PackageOption {
    PackageOption {
        value: pkg.id.clone(),
        label: format!(
            "{} — {}d (₹{}/night)",
            pkg.destination,
            pkg.duration_days,
            format_inr(pkg.base_price)
        ),
        base_price: pkg.base_price,
        duration_days: pkg.duration_days,
        season: pkg.season,
        note: format!("Duration: {} days", pkg.duration_days),
    }
}

/*
    /api/packages
*/
pub async fn get_all(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let rows: Vec<PackageRow> = data.packages().iter().map(to_row).collect();
    HttpResponse::Ok().json(rows)
}

/*
    /api/packages/options
*/
pub async fn get_options(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let options: Vec<PackageOption> = data.packages().iter().map(to_option).collect();
    HttpResponse::Ok().json(options)
}

/*
    /api/packages/{id}
*/
pub async fn get_by_id(data: web::Data<Arc<Catalog>>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match data.get(&id) {
        Ok(pkg) => HttpResponse::Ok().json(to_row(pkg)),
        Err(err) => {
            warn!("{}", err);
            HttpResponse::NotFound().json(serde_json::json!({"error": "Package not found"}))
        }
    }
}
