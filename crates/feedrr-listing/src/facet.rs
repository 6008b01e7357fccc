//! Facets
//!
//! Category and topic metadata read off listing entries, the selection the two
//! selectors describe, and the summary line shown above the results.

use std::collections::BTreeSet;

use crate::traits::Attributes;

/// Separator between the category and topic parts of the summary
const STATUS_SEPARATOR: &str = " · ";

/// Category and topics of one listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFacets {
    pub category: String,
    pub topics: Vec<String>,
}

impl ItemFacets {
    /// Build from raw attribute values.
    ///
    /// A missing or empty category becomes `missing_category`; topics are comma
    /// separated, trimmed, and empty segments dropped.
    pub fn from_attributes(category: Option<&str>, topics: Option<&str>, missing_category: &str) -> Self {
        let category = category
            .filter(|c| !c.is_empty())
            .unwrap_or(missing_category)
            .to_string();
        let topics = topics
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self { category, topics }
    }

    /// Read from an element's category and topics attributes
    pub fn read<A: Attributes + ?Sized>(
        element: &A,
        category_attr: &str,
        topics_attr: &str,
        missing_category: &str,
    ) -> Self {
        Self::from_attributes(
            element.attribute(category_attr).as_deref(),
            element.attribute(topics_attr).as_deref(),
            missing_category,
        )
    }
}

/// One selector's restriction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    All,
    Only(String),
}

impl Facet {
    pub fn parse(value: &str, wildcard: &str) -> Self {
        if value == wildcard {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Facet::All => None,
            Facet::Only(label) => Some(label),
        }
    }
}

/// Current category and topic selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSelection {
    pub category: Facet,
    pub topic: Facet,
}

impl FacetSelection {
    pub fn new(category: Facet, topic: Facet) -> Self {
        Self { category, topic }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == Facet::All && self.topic == Facet::All
    }

    /// Both facets must match
    pub fn matches(&self, item: &ItemFacets) -> bool {
        let category_match = match &self.category {
            Facet::All => true,
            Facet::Only(category) => item.category == *category,
        };
        let topic_match = match &self.topic {
            Facet::All => true,
            Facet::Only(topic) => item.topics.iter().any(|t| t == topic),
        };
        category_match && topic_match
    }

    /// Summary for `count` shown items, `None` when nothing is filtered
    pub fn status_text(&self, count: usize) -> Option<String> {
        if self.is_unfiltered() {
            return None;
        }

        let mut parts = Vec::new();
        if let Some(category) = self.category.label() {
            parts.push(capitalize(category));
        }
        if let Some(topic) = self.topic.label() {
            parts.push(topic.to_string());
        }

        let noun = if count == 1 { "article" } else { "articles" };
        Some(format!("Showing {} {} {}", count, parts.join(STATUS_SEPARATOR), noun))
    }
}

/// Upper-case the first character, leave the rest alone
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Distinct labels present on the page, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub topics: Vec<String>,
}

impl FacetOptions {
    /// Collect labels from every item. The missing-category sentinel is left out.
    pub fn collect<'a>(items: impl IntoIterator<Item = &'a ItemFacets>, missing_category: &str) -> Self {
        let mut categories = BTreeSet::new();
        let mut topics = BTreeSet::new();
        for item in items {
            if item.category != missing_category {
                categories.insert(item.category.clone());
            }
            topics.extend(item.topics.iter().cloned());
        }
        Self {
            categories: categories.into_iter().collect(),
            topics: topics.into_iter().collect(),
        }
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    pub fn has_topic(&self, label: &str) -> bool {
        self.topics.iter().any(|t| t == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(label: &str) -> Facet {
        Facet::Only(label.to_string())
    }

    fn facets(category: &str, topics: &[&str]) -> ItemFacets {
        ItemFacets {
            category: category.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_missing_attributes_default() {
        let item = ItemFacets::from_attributes(None, None, "none");
        assert_eq!(item.category, "none");
        assert!(item.topics.is_empty());
    }

    #[test]
    fn test_empty_category_is_uncategorized() {
        let item = ItemFacets::from_attributes(Some(""), Some(""), "none");
        assert_eq!(item.category, "none");
        assert!(item.topics.is_empty());
        assert!(FacetSelection::new(only("none"), Facet::All).matches(&item));
    }

    #[test]
    fn test_topics_are_trimmed() {
        let item = ItemFacets::from_attributes(Some("tech"), Some(" ai, ml ,,"), "none");
        assert_eq!(item.topics, vec!["ai", "ml"]);
    }

    #[test]
    fn test_facet_parse() {
        assert_eq!(Facet::parse("all", "all"), Facet::All);
        assert_eq!(Facet::parse("news", "all"), only("news"));
    }

    #[test]
    fn test_matches_requires_both() {
        let item = facets("tech", &["ai", "ml"]);
        assert!(FacetSelection::new(Facet::All, Facet::All).matches(&item));
        assert!(FacetSelection::new(only("tech"), only("ml")).matches(&item));
        assert!(!FacetSelection::new(only("tech"), only("rust")).matches(&item));
        assert!(!FacetSelection::new(only("news"), only("ai")).matches(&item));
    }

    #[test]
    fn test_uncategorized_only_matches_sentinel() {
        let item = ItemFacets::from_attributes(None, None, "none");
        assert!(!FacetSelection::new(only("news"), Facet::All).matches(&item));
        assert!(FacetSelection::new(only("none"), Facet::All).matches(&item));
        assert!(!FacetSelection::new(Facet::All, only("ai")).matches(&item));
    }

    #[test]
    fn test_status_text() {
        let unfiltered = FacetSelection::new(Facet::All, Facet::All);
        assert_eq!(unfiltered.status_text(7), None);

        let category = FacetSelection::new(only("news"), Facet::All);
        assert_eq!(category.status_text(1).as_deref(), Some("Showing 1 News article"));

        let topic = FacetSelection::new(Facet::All, only("ai"));
        assert_eq!(topic.status_text(3).as_deref(), Some("Showing 3 ai articles"));

        let both = FacetSelection::new(only("tech"), only("ai"));
        assert_eq!(both.status_text(2).as_deref(), Some("Showing 2 Tech · ai articles"));
    }

    #[test]
    fn test_pluralization() {
        let selection = FacetSelection::new(only("news"), Facet::All);
        assert!(selection.status_text(0).unwrap().ends_with("articles"));
        assert!(selection.status_text(1).unwrap().ends_with("article"));
        assert!(selection.status_text(2).unwrap().ends_with("articles"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("news"), "News");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_collect_options() {
        let items = vec![
            facets("tech", &["ml", "ai"]),
            facets("news", &["ai"]),
            facets("none", &["rust"]),
        ];
        let options = FacetOptions::collect(&items, "none");
        assert_eq!(options.categories, vec!["news", "tech"]);
        assert_eq!(options.topics, vec!["ai", "ml", "rust"]);
        assert!(options.has_topic("rust"));
        assert!(!options.has_category("none"));
    }
}
