//! Expandable Articles
//!
//! Marked headers expand their article; links inside them keep their clicks.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use feedrr_listing::{ExpandableItem, UiConfig, UiResult};

use crate::dom::{self, js_err, DomElement};
use crate::listeners::{Listener, Listeners};

/// Whether the click started on an action control inside `header`
fn from_action(ev: &Event, header: &Element, action_selector: &str) -> bool {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    match target.closest(action_selector) {
        Ok(Some(action)) => {
            let action: &Node = &action;
            header.contains(Some(action))
        }
        _ => false,
    }
}

pub fn attach(config: &UiConfig) -> UiResult<Listeners> {
    let mut listeners = Listeners::default();

    for header in dom::query_all(&config.header_selector)? {
        let Some(container) = header.closest(&config.item_selector).map_err(js_err)? else {
            log::warn!("[EXPAND] Header outside any {}", config.item_selector);
            continue;
        };
        let Some(item) = ExpandableItem::attach(
            &DomElement(header.clone()),
            DomElement(container),
            &config.expandable_attr,
            config.expanded_class.clone(),
        ) else {
            continue;
        };

        let owner = header.clone();
        let action_selector = config.action_selector.clone();
        listeners.push(Listener::attach(&header, "click", move |ev: Event| {
            item.on_click(from_action(&ev, &owner, &action_selector));
        })?);
    }

    log::debug!("[EXPAND] {} listeners attached", listeners.len());
    Ok(listeners)
}
