//! View Toggle
//!
//! List/cards switch on the root container, remembered in localStorage.

use feedrr_listing::{MemoryStore, PreferenceStore, UiConfig, UiResult, ViewModePreference};

use crate::dom::{self, DomElement, LocalStorage};
use crate::listeners::{Listener, Listeners};

fn open_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[VIEW] {}; view preference will not persist", e);
            Box::new(MemoryStore::new())
        }
    }
}

pub fn attach(config: &UiConfig) -> UiResult<Listeners> {
    let root = DomElement(dom::query(&config.root_selector)?);
    // The saved layout applies even when the page has no toggle.
    let view = ViewModePreference::init(open_store(), root, config.storage_key.clone());
    let toggle = dom::element_by_id(&config.view_toggle_id)?;

    let mut listeners = Listeners::default();
    listeners.push(Listener::attach(&toggle, "click", move |_| {
        view.toggle();
    })?);
    Ok(listeners)
}
