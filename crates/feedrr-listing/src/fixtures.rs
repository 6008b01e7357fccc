//! In-memory page elements for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::error::{UiError, UiResult};
use crate::traits::{Attributes, ClassList, FilterItem, PreferenceStore, SelectControl, StatusLine};

#[derive(Debug, Default)]
pub struct FakeElement {
    pub classes: RefCell<BTreeSet<String>>,
    pub attrs: HashMap<String, String>,
    pub text: RefCell<String>,
    pub visible: Cell<bool>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self {
            visible: Cell::new(true),
            ..Default::default()
        }
    }

    pub fn with_class(self, class: &str) -> Self {
        self.classes.borrow_mut().insert(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Listing entry with optional category and topics attributes
    pub fn item(category: Option<&str>, topics: Option<&str>) -> Self {
        let mut item = Self::new();
        if let Some(category) = category {
            item = item.with_attr("data-category", category);
        }
        if let Some(topics) = topics {
            item = item.with_attr("data-topics", topics);
        }
        item
    }

    pub fn class_names(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl ClassList for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}

impl Attributes for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }
}

impl FilterItem for FakeElement {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

impl StatusLine for FakeElement {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

#[derive(Debug)]
pub struct FakeSelect {
    pub value: RefCell<String>,
}

impl FakeSelect {
    pub fn new(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_string()),
        }
    }

    pub fn choose(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl SelectControl for FakeSelect {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

/// Store whose writes always fail and whose reads always miss
pub struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> UiResult<()> {
        Err(UiError::Storage("quota exceeded".to_string()))
    }
}
