//! Gallery filter and detail overlay state.

use crate::fixtures;
use crate::types::{CategoryFilter, GalleryImage};

/// The photo gallery: a fixed image list, a category filter and an optional
/// selected image shown in the detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoGallery {
    images: Vec<GalleryImage>,
    filter: CategoryFilter,
    selected: Option<u32>,
}

impl Default for PhotoGallery {
    fn default() -> Self {
        Self::new(fixtures::gallery_images())
    }
}

impl PhotoGallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            filter: CategoryFilter::All,
            selected: None,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        tracing::debug!(category = filter.as_str(), "Gallery filter changed");
        self.filter = filter;
    }

    /// Images passing the current filter, in fixture order
    pub fn visible(&self) -> Vec<&GalleryImage> {
        self.images
            .iter()
            .filter(|img| self.filter.matches(img.category))
            .collect()
    }

    pub fn all_images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Open the detail overlay. Unknown ids leave it closed.
    pub fn open(&mut self, id: u32) -> Option<&GalleryImage> {
        self.selected = self.images.iter().any(|img| img.id == id).then_some(id);
        self.selected_image()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected_image(&self) -> Option<&GalleryImage> {
        let id = self.selected?;
        self.images.iter().find(|img| img.id == id)
    }
}
