//! Gallery Grid Component
//!
//! Square photo tiles with a caption that slides up on hover.

use dioxus::prelude::*;
use urbanskate_core::GalleryImage;

/// Thumbnail grid for the photo gallery
#[component]
pub fn GalleryGrid(
    /// Photos passing the current filter
    images: Vec<GalleryImage>,
    /// Click handler (receives photo id)
    on_open: EventHandler<u32>,
) -> Element {
    if images.is_empty() {
        return rsx! {
            p { class: "empty-state", "No photos in this category yet." }
        };
    }

    rsx! {
        div { class: "photo-grid",
            for image in images.iter() {
                {
                    let id = image.id;
                    rsx! {
                        div {
                            key: "{image.id}",
                            class: "photo-tile",
                            onclick: move |_| on_open.call(id),

                            img { src: "{image.src}", alt: "{image.alt}" }

                            div { class: "photo-caption",
                                h3 { "{image.title}" }
                                p { "by {image.photographer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
