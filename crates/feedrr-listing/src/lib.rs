//! feedrr Listing Behaviors
//!
//! Interactive layer of the generated article listing:
//! - view_mode: list/cards layout remembered in local storage
//! - filter: category and topic selectors narrowing the visible articles
//! - expand: expandable article headers
//!
//! Everything is written against small element traits; the page binds them
//! to real DOM elements.

mod config;
mod error;
mod expand;
mod facet;
mod filter;
mod store;
mod traits;
mod view_mode;

#[cfg(test)]
mod fixtures;

pub use config::{UiConfig, CONFIG_ELEMENT_ID};
pub use error::{UiError, UiResult};
pub use expand::ExpandableItem;
pub use facet::{Facet, FacetOptions, FacetSelection, ItemFacets};
pub use filter::{FacetFilter, FilterOutcome};
pub use store::MemoryStore;
pub use traits::{Attributes, ClassList, FilterItem, PreferenceStore, SelectControl, StatusLine};
pub use view_mode::{ViewMode, ViewModePreference};
