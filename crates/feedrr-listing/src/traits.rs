//! Page Seams
//!
//! The behaviors never touch the DOM directly. The page binds these traits to
//! real elements; tests bind them to in-memory fixtures.
//!
//! Every method takes `&self`: DOM handles mutate through shared references, so
//! implementations use interior mutability where they keep state.

use crate::error::UiResult;

/// Key-value persistence for user preferences
pub trait PreferenceStore {
    /// Read a value. Read failures are reported as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> UiResult<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        (**self).set(key, value)
    }
}

/// An element's styling class set
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Flip `class`, returning whether it is now present
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

/// Read-only access to an element's attributes
pub trait Attributes {
    fn attribute(&self, name: &str) -> Option<String>;
}

/// A single-choice selector control
pub trait SelectControl {
    fn value(&self) -> String;
}

/// A listing entry the facet filter can show or hide
pub trait FilterItem: Attributes {
    fn set_visible(&self, visible: bool);
}

/// The filter summary line
pub trait StatusLine: ClassList {
    fn set_text(&self, text: &str);
}

// Borrowed handles behave like the element they point at.

impl<T: ClassList + ?Sized> ClassList for &T {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class)
    }
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

impl<T: SelectControl + ?Sized> SelectControl for &T {
    fn value(&self) -> String {
        (**self).value()
    }
}

impl<T: FilterItem + ?Sized> FilterItem for &T {
    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible)
    }
}

impl<T: StatusLine + ?Sized> StatusLine for &T {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}
