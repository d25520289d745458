//! Gateway context provider for Urban Skate Track.
//!
//! Provides the shared [`MockGateway`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| MockGateway::new(get_sim_config()));
//!
//! // In child components
//! let gateway = use_gateway();
//! ```

use dioxus::prelude::*;
use urbanskate_core::{MockGateway, SimConfig};

/// Get the simulation config for the application.
/// Uses the global config set from command line args.
pub fn get_sim_config() -> SimConfig {
    crate::get_sim_config()
}

/// Hook to access the simulated payment/wallet backend from context.
///
/// The gateway is cheap to clone; clone it into each spawned task.
pub fn use_gateway() -> MockGateway {
    use_context::<MockGateway>()
}
