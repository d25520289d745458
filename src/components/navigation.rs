//! Site Navigation Component
//!
//! Sticky black bar with the brand on the left and page links on the right.
//! Below 768px the links collapse behind a hamburger toggle.

use dioxus::prelude::*;

use crate::app::Route;

/// Page the user is currently on
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Gallery,
    Donate,
    Nft,
}

impl NavLocation {
    pub fn all() -> [NavLocation; 4] {
        [
            NavLocation::Home,
            NavLocation::Gallery,
            NavLocation::Donate,
            NavLocation::Nft,
        ]
    }

    /// Link text shown in the bar
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Gallery => "Gallery",
            NavLocation::Donate => "Donate",
            NavLocation::Nft => "NFT Dashboard",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Gallery => Route::Gallery {},
            NavLocation::Donate => Route::Donate {},
            NavLocation::Nft => Route::Nft {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Top navigation bar shared by every page.
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let link_class = move |location: NavLocation| {
        if location == props.current {
            "site-link active"
        } else {
            "site-link"
        }
    };

    rsx! {
        nav { class: "site-nav",
            div { class: "site-nav-inner",
                Link { to: Route::Home {}, class: "site-logo", "URBAN SKATE" }

                div { class: "site-links",
                    for location in NavLocation::all() {
                        Link {
                            to: location.route(),
                            class: link_class(location),
                            "{location.display_name()}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: if menu_open() { "menu-toggle open" } else { "menu-toggle" },
                    "aria-label": "Toggle menu",
                    "aria-expanded": "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    span {}
                    span {}
                    span {}
                }
            }

            if menu_open() {
                div { class: "mobile-menu",
                    for location in NavLocation::all() {
                        Link {
                            to: location.route(),
                            class: link_class(location),
                            onclick: move |_| menu_open.set(false),
                            "{location.display_name()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_location_has_distinct_route() {
        let routes: Vec<Route> = NavLocation::all().iter().map(|l| l.route()).collect();
        for (i, a) in routes.iter().enumerate() {
            for b in routes.iter().skip(i + 1) {
                assert!(a != b);
            }
        }
    }

    #[test]
    fn test_dashboard_label() {
        assert_eq!(NavLocation::Nft.display_name(), "NFT Dashboard");
    }
}
