//! Expandable Items
//!
//! A click on a marked header flips the `expanded` class on its item. Clicks
//! that land on a link inside the header are left to the link.

use crate::traits::{Attributes, ClassList};

pub struct ExpandableItem<C> {
    container: C,
    expanded_class: String,
}

impl<C: ClassList> ExpandableItem<C> {
    /// Wire `container` to `header` if the header carries `marker`
    pub fn attach<H: Attributes + ?Sized>(
        header: &H,
        container: C,
        marker: &str,
        expanded_class: impl Into<String>,
    ) -> Option<Self> {
        header.attribute(marker)?;
        Some(Self {
            container,
            expanded_class: expanded_class.into(),
        })
    }

    /// Header click handler. `from_action` is set when the click started on an
    /// embedded action control; such clicks never toggle. Returns whether the
    /// item was toggled.
    pub fn on_click(&self, from_action: bool) -> bool {
        if from_action {
            return false;
        }
        let expanded = self.container.toggle_class(&self.expanded_class);
        log::debug!("[EXPAND] {}", if expanded { "expanded" } else { "collapsed" });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FakeElement;

    fn header() -> FakeElement {
        FakeElement::new().with_attr("data-expandable", "")
    }

    #[test]
    fn test_unmarked_header_is_inert() {
        let item = FakeElement::new();
        let plain = FakeElement::new();
        assert!(ExpandableItem::attach(&plain, &item, "data-expandable", "expanded").is_none());
    }

    #[test]
    fn test_header_clicks_toggle() {
        let item = FakeElement::new().with_class("article");
        let expandable = ExpandableItem::attach(&header(), &item, "data-expandable", "expanded")
            .expect("marked header");

        assert!(!item.has_class("expanded"));
        assert!(expandable.on_click(false));
        assert!(item.has_class("expanded"));
        assert!(expandable.on_click(false));
        assert!(!item.has_class("expanded"));
        assert!(item.has_class("article"));
    }

    #[test]
    fn test_action_click_does_not_toggle() {
        let item = FakeElement::new();
        let expandable = ExpandableItem::attach(&header(), &item, "data-expandable", "expanded")
            .expect("marked header");

        assert!(!expandable.on_click(true));
        assert!(!item.has_class("expanded"));

        expandable.on_click(false);
        assert!(!expandable.on_click(true));
        assert!(item.has_class("expanded"));
    }
}
