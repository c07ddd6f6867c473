use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GalleryItem {
    pub thumb: String,
    pub large: String,
    pub caption: String,
}

impl GalleryItem {
    pub fn new(thumb: &str, large: &str, caption: &str) -> Self {
        Self {
            thumb: thumb.to_string(),
            large: large.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// A gallery thumbnail as the client renders it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GalleryEntry {
    pub index: usize,
    pub thumb: String,
    pub large: String,
    pub caption: String,
    pub title: String,
}

impl GalleryEntry {
    pub fn from_item(index: usize, item: &GalleryItem) -> Self {
        Self {
            index,
            thumb: item.thumb.clone(),
            large: item.large.clone(),
            caption: item.caption.clone(),
            title: format!("{} — click to enlarge", item.caption),
        }
    }
}
