//! Facet Filter
//!
//! Category and topic selectors narrowing the article list.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use feedrr_listing::{FacetFilter, UiConfig, UiResult};

use crate::dom::{self, DomElement, DomItem, DomSelect};
use crate::listeners::{Listener, Listeners};

pub fn attach(config: &UiConfig) -> UiResult<Listeners> {
    let category = DomSelect::by_id(&config.category_filter_id)?;
    let topic = DomSelect::by_id(&config.topic_filter_id)?;
    let status = DomElement(dom::element_by_id(&config.status_id)?);
    let items: Vec<DomItem> = dom::query_all(&config.item_selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(DomItem)
        .collect();

    let filter = Rc::new(FacetFilter::new(category.clone(), topic.clone(), items, status, config));

    let options = filter.options();
    log::info!(
        "[FILTER] {} articles, {} categories, {} topics",
        filter.item_count(),
        options.categories.len(),
        options.topics.len()
    );
    for label in filter.unknown_selections() {
        log::warn!("[FILTER] Selected '{}' matches no article", label);
    }

    // Browsers restore select values on back navigation.
    filter.apply_filters();

    let mut listeners = Listeners::default();
    for select in [&category, &topic] {
        let filter = Rc::clone(&filter);
        listeners.push(Listener::attach(&select.0, "change", move |_| {
            filter.apply_filters();
        })?);
    }
    Ok(listeners)
}
