//! feedrr Listing Page Entry Point
//!
//! Attaches the view toggle, facet filter and expandable articles to the
//! generated listing page.

mod components;
mod config;
mod dom;
mod listeners;
mod logger;

use leptos::prelude::document;

use feedrr_listing::UiConfig;

use components::{AttachFn, BEHAVIORS};
use listeners::Listener;

/// Attach every behavior, returning how many came up
fn boot(behaviors: &[(&str, AttachFn)], config: &UiConfig) -> usize {
    let mut ready = 0;
    for (name, attach) in behaviors {
        match attach(config) {
            Ok(listeners) => {
                log::debug!("[BOOT] {} ready ({} listeners)", name, listeners.len());
                listeners.keep_alive();
                ready += 1;
            }
            // One behavior missing its markup must not take the others down.
            Err(e) => log::warn!("[BOOT] Skipping {}: {}", name, e),
        }
    }
    ready
}

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    logger::init(
        loaded
            .as_ref()
            .map(UiConfig::level_filter)
            .unwrap_or(log::LevelFilter::Info),
    );
    let config = loaded.unwrap_or_else(|e| {
        log::warn!("[BOOT] {}; using defaults", e);
        UiConfig::default()
    });

    let doc = document();
    if doc.ready_state() != "loading" {
        boot(BEHAVIORS, &config);
        return;
    }

    match Listener::attach(&doc, "DOMContentLoaded", move |_| {
        boot(BEHAVIORS, &config);
    }) {
        Ok(listener) => std::mem::forget(listener),
        Err(e) => log::error!("[BOOT] Could not wait for DOMContentLoaded: {}", e),
    }
}
