//! Facet Filter
//!
//! Shows the items matching both selectors and keeps the status line in step.

use crate::config::UiConfig;
use crate::facet::{Facet, FacetOptions, FacetSelection, ItemFacets};
use crate::traits::{FilterItem, SelectControl, StatusLine};

/// Result of one filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub shown: usize,
    /// `None` when both selectors are on the wildcard
    pub status: Option<String>,
}

/// Labels the filter needs from the page configuration
#[derive(Debug, Clone)]
struct FacetNames {
    category_attr: String,
    topics_attr: String,
    wildcard: String,
    missing_category: String,
    active_class: String,
}

pub struct FacetFilter<C, I, S> {
    category: C,
    topic: C,
    items: Vec<I>,
    status: S,
    names: FacetNames,
}

impl<C, I, S> FacetFilter<C, I, S>
where
    C: SelectControl,
    I: FilterItem,
    S: StatusLine,
{
    pub fn new(category: C, topic: C, items: Vec<I>, status: S, config: &UiConfig) -> Self {
        Self {
            category,
            topic,
            items,
            status,
            names: FacetNames {
                category_attr: config.category_attr.clone(),
                topics_attr: config.topics_attr.clone(),
                wildcard: config.wildcard.clone(),
                missing_category: config.missing_category.clone(),
                active_class: config.active_class.clone(),
            },
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Selection currently shown by the two selectors
    pub fn selection(&self) -> FacetSelection {
        FacetSelection::new(
            Facet::parse(&self.category.value(), &self.names.wildcard),
            Facet::parse(&self.topic.value(), &self.names.wildcard),
        )
    }

    fn facets_of(&self, item: &I) -> ItemFacets {
        ItemFacets::read(
            item,
            &self.names.category_attr,
            &self.names.topics_attr,
            &self.names.missing_category,
        )
    }

    /// Labels present across all items
    pub fn options(&self) -> FacetOptions {
        let facets: Vec<ItemFacets> = self.items.iter().map(|item| self.facets_of(item)).collect();
        FacetOptions::collect(&facets, &self.names.missing_category)
    }

    /// Recompute visibility of every item from the current selector values
    pub fn apply_filters(&self) -> FilterOutcome {
        let selection = self.selection();
        let mut shown = 0;
        for item in &self.items {
            let visible = selection.matches(&self.facets_of(item));
            item.set_visible(visible);
            if visible {
                shown += 1;
            }
        }

        log::debug!("[FILTER] {:?} -> {} of {} shown", selection, shown, self.items.len());
        let status = self.update_filter_status(&selection, shown);
        FilterOutcome { shown, status }
    }

    /// Render the summary line for `count` shown items
    pub fn update_filter_status(&self, selection: &FacetSelection, count: usize) -> Option<String> {
        match selection.status_text(count) {
            Some(text) => {
                self.status.set_text(&text);
                self.status.add_class(&self.names.active_class);
                Some(text)
            }
            None => {
                self.status.set_text("");
                self.status.remove_class(&self.names.active_class);
                None
            }
        }
    }

    /// Selector values that match no label on the page
    pub fn unknown_selections(&self) -> Vec<String> {
        let options = self.options();
        let selection = self.selection();
        let mut unknown = Vec::new();
        if let Some(category) = selection.category.label() {
            if category != self.names.missing_category && !options.has_category(category) {
                unknown.push(category.to_string());
            }
        }
        if let Some(topic) = selection.topic.label() {
            if !options.has_topic(topic) {
                unknown.push(topic.to_string());
            }
        }
        unknown
    }
}
