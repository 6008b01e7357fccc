//! Page Configuration Loader

use leptos::prelude::document;

use feedrr_listing::{UiConfig, UiResult, CONFIG_ELEMENT_ID};

/// Read the optional `<script type="application/json" id="feedrr-config">` block
pub fn load() -> UiResult<UiConfig> {
    match document().get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(block) => UiConfig::from_json(&block.text_content().unwrap_or_default()),
        None => Ok(UiConfig::default()),
    }
}
