//! Page Configuration
//!
//! Names of everything the behaviors look up or write on the page. Defaults match
//! the markup the site generator emits; a page can override any subset through an
//! embedded JSON block.

use serde::Deserialize;

use crate::error::{UiError, UiResult};

/// Element id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "feedrr-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// localStorage key holding the view mode
    pub storage_key: String,
    /// Selector of the container carrying `view-list` / `view-cards`
    pub root_selector: String,
    pub view_toggle_id: String,
    pub category_filter_id: String,
    pub topic_filter_id: String,
    pub status_id: String,
    /// Selector matching every listing entry
    pub item_selector: String,
    pub category_attr: String,
    /// Comma-separated topic labels
    pub topics_attr: String,
    pub header_selector: String,
    /// Marker attribute a header needs to be expandable
    pub expandable_attr: String,
    /// Embedded controls inside a header that must not toggle it
    pub action_selector: String,
    pub expanded_class: String,
    pub active_class: String,
    /// Selector value meaning "no restriction"
    pub wildcard: String,
    /// Category given to items without a category attribute
    pub missing_category: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: "feedrr-view".to_string(),
            root_selector: "body".to_string(),
            view_toggle_id: "view-toggle".to_string(),
            category_filter_id: "category-filter".to_string(),
            topic_filter_id: "topic-filter".to_string(),
            status_id: "filter-status".to_string(),
            item_selector: ".article".to_string(),
            category_attr: "data-category".to_string(),
            topics_attr: "data-topics".to_string(),
            header_selector: ".article-header".to_string(),
            expandable_attr: "data-expandable".to_string(),
            action_selector: "a".to_string(),
            expanded_class: "expanded".to_string(),
            active_class: "active".to_string(),
            wildcard: "all".to_string(),
            missing_category: "none".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a configuration block. Absent fields keep their defaults.
    pub fn from_json(text: &str) -> UiResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Configured log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
