//! DOM Bindings
//!
//! web-sys handles implementing the listing traits, plus page lookups.

use leptos::prelude::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlSelectElement, NodeList, Storage};

use feedrr_listing::{
    Attributes, ClassList, FilterItem, PreferenceStore, SelectControl, StatusLine, UiError, UiResult,
};

pub fn js_err(e: JsValue) -> UiError {
    UiError::Dom(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

// ========================
// Lookups
// ========================

pub fn element_by_id(id: &str) -> UiResult<Element> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(format!("#{}", id)))
}

pub fn query(selector: &str) -> UiResult<Element> {
    document()
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| UiError::MissingElement(selector.to_string()))
}

pub fn query_all(selector: &str) -> UiResult<Vec<Element>> {
    let list = document().query_selector_all(selector).map_err(js_err)?;
    Ok(elements(&list))
}

/// Descendants of `parent` matching `selector`
pub fn query_all_in(parent: &Element, selector: &str) -> UiResult<Vec<Element>> {
    let list = parent.query_selector_all(selector).map_err(js_err)?;
    Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// ========================
// Element Wrappers
// ========================

/// Any element: classes, attributes, text
#[derive(Clone)]
pub struct DomElement(pub Element);

impl ClassList for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            log::warn!("[DOM] add class '{}': {}", class, js_err(e));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            log::warn!("[DOM] remove class '{}': {}", class, js_err(e));
        }
    }
}

impl Attributes for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

impl StatusLine for DomElement {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Listing entry, hidden through its inline display style
pub struct DomItem(pub HtmlElement);

impl Attributes for DomItem {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

impl FilterItem for DomItem {
    fn set_visible(&self, visible: bool) {
        let style = self.0.style();
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        if let Err(e) = result {
            log::warn!("[DOM] set display: {}", js_err(e));
        }
    }
}

#[derive(Clone)]
pub struct DomSelect(pub HtmlSelectElement);

impl DomSelect {
    pub fn by_id(id: &str) -> UiResult<Self> {
        element_by_id(id)?
            .dyn_into::<HtmlSelectElement>()
            .map(DomSelect)
            .map_err(|_| UiError::Dom(format!("#{} is not a <select>", id)))
    }
}

impl SelectControl for DomSelect {
    fn value(&self) -> String {
        self.0.value()
    }
}

// ========================
// Storage
// ========================

/// Browser localStorage
pub struct LocalStorage(Storage);

impl LocalStorage {
    pub fn open() -> UiResult<Self> {
        window()
            .local_storage()
            .map_err(js_err)?
            .map(LocalStorage)
            .ok_or_else(|| UiError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| UiError::Storage(format!("{:?}", e)))
    }
}
