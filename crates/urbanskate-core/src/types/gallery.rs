//! Gallery photo records and category tags.

use serde::{Deserialize, Serialize};

/// Category tag on a gallery photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Tricks,
    Park,
    Bowl,
    Street,
    Events,
    Night,
    Lessons,
    Community,
}

impl GalleryCategory {
    /// Machine value used in filters ("tricks", "park", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Tricks => "tricks",
            GalleryCategory::Park => "park",
            GalleryCategory::Bowl => "bowl",
            GalleryCategory::Street => "street",
            GalleryCategory::Events => "events",
            GalleryCategory::Night => "night",
            GalleryCategory::Lessons => "lessons",
            GalleryCategory::Community => "community",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Tricks => "Tricks",
            GalleryCategory::Park => "Park",
            GalleryCategory::Bowl => "Bowl",
            GalleryCategory::Street => "Street",
            GalleryCategory::Events => "Events",
            GalleryCategory::Night => "Night",
            GalleryCategory::Lessons => "Lessons",
            GalleryCategory::Community => "Community",
        }
    }

    pub fn all() -> &'static [GalleryCategory] {
        &[
            GalleryCategory::Tricks,
            GalleryCategory::Park,
            GalleryCategory::Bowl,
            GalleryCategory::Street,
            GalleryCategory::Events,
            GalleryCategory::Night,
            GalleryCategory::Lessons,
            GalleryCategory::Community,
        ]
    }
}

/// Gallery filter selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(GalleryCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order, "All Photos" first.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(GalleryCategory::all().iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Photos",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Whether a photo in `category` passes this filter
    pub fn matches(&self, category: GalleryCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// A photo in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    pub alt: String,
    pub category: GalleryCategory,
    pub title: String,
    pub description: String,
    pub photographer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_start_with_all() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[0].label(), "All Photos");
        assert_eq!(options[1].as_str(), "tricks");
    }

    #[test]
    fn test_serialized_tag_matches_filter_value() {
        for category in GalleryCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_matches() {
        assert!(CategoryFilter::All.matches(GalleryCategory::Night));
        assert!(CategoryFilter::Only(GalleryCategory::Bowl).matches(GalleryCategory::Bowl));
        assert!(!CategoryFilter::Only(GalleryCategory::Bowl).matches(GalleryCategory::Park));
    }
}
