//! Photo gallery page.

use dioxus::prelude::*;
use urbanskate_core::PhotoGallery;

use crate::components::{CategoryPills, GalleryGrid, NavBar, NavLocation, PhotoModal};

#[component]
pub fn Gallery() -> Element {
    let mut gallery = use_signal(PhotoGallery::default);

    let g = gallery.read();
    let filter = g.filter();
    let visible: Vec<_> = g.visible().into_iter().cloned().collect();
    let selected = g.selected_image().cloned();
    drop(g);

    rsx! {
        main { class: "page",
            NavBar { current: NavLocation::Gallery }

            div { class: "container",
                div { class: "page-intro",
                    h1 { class: "page-title", "PHOTO GALLERY" }
                    p { class: "page-lead",
                        "Capturing the essence of skateboarding culture through the lens. Every trick, every moment, every story told in pixels."
                    }
                }

                CategoryPills {
                    selected: filter,
                    on_select: move |f| gallery.write().select_category(f),
                }

                GalleryGrid {
                    images: visible,
                    on_open: move |id| {
                        if gallery.write().open(id).is_none() {
                            tracing::debug!(id, "No photo with that id");
                        }
                    },
                }
            }

            if let Some(image) = selected {
                PhotoModal { image, on_close: move |_| gallery.write().close() }
            }
        }
    }
}
