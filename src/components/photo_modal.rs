//! Photo Detail Modal
//!
//! Full-size photo with title, description, photographer and category.
//! Clicking the backdrop or the close button dismisses it.

use dioxus::prelude::*;
use urbanskate_core::GalleryImage;

use crate::components::clipboard::copy_text;

/// Photo detail overlay
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(image) = gallery.read().selected_image().cloned() {
///         PhotoModal { image, on_close: move |_| gallery.write().close() }
///     }
/// }
/// ```
#[component]
pub fn PhotoModal(
    /// Photo being shown
    image: GalleryImage,
    /// Callback when the overlay is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let mut shared = use_signal(|| false);

    let src = image.src.clone();
    let share = move |_| {
        copy_text(&src);
        shared.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            shared.set(false);
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }

                img { src: "{image.src}", alt: "{image.alt}" }

                div { class: "modal-body",
                    h2 { "{image.title}" }
                    p { "{image.description}" }

                    div { class: "modal-meta",
                        span { "Photo by {image.photographer}" }
                        span { class: "tag", "{image.category.label()}" }
                    }

                    div { class: "modal-actions",
                        button {
                            class: "btn btn-primary btn-small",
                            onclick: share,
                            if shared() { "Link Copied!" } else { "Share" }
                        }
                        a {
                            class: "btn btn-outline btn-small",
                            href: "{image.src}",
                            download: "{image.title}",
                            "Download"
                        }
                    }
                }
            }
        }
    }
}
