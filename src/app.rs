use dioxus::prelude::*;
use urbanskate_core::MockGateway;

use crate::context::get_sim_config;
use crate::pages::{Donate, Gallery, Home, Nft};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with hero and track info
/// - `/gallery` - Photo gallery with category filter
/// - `/donate` - Donation wizard
/// - `/nft` - Mocked NFT dashboard
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/gallery")]
    Gallery {},
    #[route("/donate")]
    Donate {},
    #[route("/nft")]
    Nft {},
}

/// Root application component.
///
/// Provides global styles, the mock gateway context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = get_sim_config();
        tracing::debug!(?config, "Mock gateway ready");
        MockGateway::new(config)
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
