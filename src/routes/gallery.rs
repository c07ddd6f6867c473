use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::{db::catalog::Catalog, models::gallery::GalleryEntry};

pub async fn get_gallery(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let entries: Vec<GalleryEntry> = data
        .gallery()
        .iter()
        .enumerate()
        .map(|(index, item)| GalleryEntry::from_item(index, item))
        .collect();
    HttpResponse::Ok().json(entries)
}
