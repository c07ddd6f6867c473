use std::sync::{Arc, OnceLock};

use log::info;

use crate::models::{
    gallery::GalleryItem,
    package::{Package, Season},
};

static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

#[derive(Debug)]
pub enum CatalogError {
    PackageNotFound(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::PackageNotFound(id) => write!(f, "Package not found: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Fixed package and gallery data. Built once per process; there is no
/// mutation path.
#[derive(Debug)]
pub struct Catalog {
    packages: Vec<Package>,
    gallery: Vec<GalleryItem>,
}

impl Catalog {
    pub fn new(packages: Vec<Package>, gallery: Vec<GalleryItem>) -> Self {
        Self { packages, gallery }
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    /// Looks a package up by id. Blank ids never match.
    pub fn find(&self, id: &str) -> Option<&Package> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.packages.iter().find(|pkg| pkg.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&Package, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::PackageNotFound(id.to_string()))
    }
}

fn default_packages() -> Vec<Package> {
    vec![
        Package::new("P001", "Goa", 5, 4000, Season::Peak),
        Package::new("P002", "Manali", 6, 3500, Season::Shoulder),
        Package::new("P003", "Jaipur & Udaipur", 7, 3000, Season::Off),
        Package::new("P004", "Andaman", 6, 6000, Season::Peak),
        Package::new("P005", "Kerala", 5, 3200, Season::Shoulder),
    ]
}

fn default_gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem::new(
            "https://via.placeholder.com/400x300?text=Goa",
            "https://via.placeholder.com/1200x800?text=Goa+Large",
            "Beaches of Goa",
        ),
        GalleryItem::new(
            "https://via.placeholder.com/400x500?text=Manali",
            "https://via.placeholder.com/1200x1600?text=Manali+Large",
            "Himalayan Views - Manali",
        ),
        GalleryItem::new(
            "https://via.placeholder.com/400x300?text=Jaipur",
            "https://via.placeholder.com/1200x800?text=Jaipur+Large",
            "Rajasthan Palaces",
        ),
        GalleryItem::new(
            "https://via.placeholder.com/400x300?text=Andaman",
            "https://via.placeholder.com/1200x800?text=Andaman+Large",
            "Andaman Islands",
        ),
        GalleryItem::new(
            "https://via.placeholder.com/400x350?text=Kerala",
            "https://via.placeholder.com/1200x1050?text=Kerala+Large",
            "Backwaters of Kerala",
        ),
    ]
}

/// Returns the process-wide catalog, building it on first use.
pub fn create_catalog() -> Arc<Catalog> {
    CATALOG
        .get_or_init(|| {
            let catalog = Catalog::new(default_packages(), default_gallery());
            info!(
                "Catalog loaded with {} packages and {} gallery items",
                catalog.packages.len(),
                catalog.gallery.len()
            );
            Arc::new(catalog)
        })
        .clone()
}
