//! View Mode Preference
//!
//! List or cards layout, remembered across page loads and mirrored onto the
//! root container as `view-list` / `view-cards`.

use std::cell::Cell;

use crate::traits::{ClassList, PreferenceStore};

/// Display layout of the listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Cards,
}

impl ViewMode {
    /// Value written to storage
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Cards => "cards",
        }
    }

    /// Parse a stored value; anything but the two known values is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "list" => Some(ViewMode::List),
            "cards" => Some(ViewMode::Cards),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Cards,
            ViewMode::Cards => ViewMode::List,
        }
    }

    /// Styling class on the root container
    pub fn class_name(self) -> &'static str {
        match self {
            ViewMode::List => "view-list",
            ViewMode::Cards => "view-cards",
        }
    }
}

/// Keeps the root container's class in step with the stored preference
pub struct ViewModePreference<S, R> {
    store: S,
    root: R,
    key: String,
    mode: Cell<ViewMode>,
}

impl<S: PreferenceStore, R: ClassList> ViewModePreference<S, R> {
    /// Restore the saved mode and apply its class to `root`
    pub fn init(store: S, root: R, key: impl Into<String>) -> Self {
        let key = key.into();
        let mode = match store.get(&key) {
            Some(saved) => ViewMode::parse(&saved).unwrap_or_else(|| {
                log::warn!("[VIEW] Ignoring unknown stored view '{}'", saved);
                ViewMode::default()
            }),
            None => ViewMode::default(),
        };

        root.remove_class(mode.toggled().class_name());
        root.add_class(mode.class_name());
        log::debug!("[VIEW] Restored {} view", mode.as_str());

        Self {
            store,
            root,
            key,
            mode: Cell::new(mode),
        }
    }

    /// Flip between list and cards, persisting the new mode
    pub fn toggle(&self) -> ViewMode {
        let old = self.mode.get();
        let new = old.toggled();

        self.root.remove_class(old.class_name());
        self.root.add_class(new.class_name());
        self.mode.set(new);

        if let Err(e) = self.store.set(&self.key, new.as_str()) {
            log::warn!("[VIEW] Could not save view preference: {}", e);
        }
        log::debug!("[VIEW] Switched to {} view", new.as_str());
        new
    }
}
