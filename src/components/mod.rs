//! Page Behaviors
//!
//! Each behavior looks up its own elements and registers its own listeners.

mod expandable;
mod facet_filter;
mod view_toggle;

use feedrr_listing::{UiConfig, UiResult};

use crate::listeners::Listeners;

pub type AttachFn = fn(&UiConfig) -> UiResult<Listeners>;

/// Behaviors in boot order
pub const BEHAVIORS: &[(&str, AttachFn)] = &[
    ("view toggle", view_toggle::attach as AttachFn),
    ("facet filter", facet_filter::attach as AttachFn),
    ("expandable articles", expandable::attach as AttachFn),
];
