//! Search results and facets.

use serde::{Deserialize, Serialize};

/// Search results container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// The visible items, in display order.
    pub items: Vec<T>,
    /// Size of the set the query ran over.
    pub total: usize,
    /// Facet counts over the visible items.
    pub facets: Vec<Facet>,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self {
            items,
            total,
            facets: Vec::new(),
        }
    }

    /// Set facets.
    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Look up a facet by field.
    pub fn facet(&self, field: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.field == field)
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Categories", "Colors").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new terms facet.
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Count for one value, 0 if absent.
    pub fn count(&self, value: &str) -> usize {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map_or(0, |v| v.count)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of visible items with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results() {
        let results = SearchResults::new(vec![1, 2, 3], 10);
        assert_eq!(results.len(), 3);
        assert_eq!(results.total, 10);
        assert!(!results.is_empty());
        assert!(results.facet("category").is_none());
    }

    #[test]
    fn test_facet_counts() {
        let mut facet = Facet::terms("Colors", "color");
        facet.add_value("red", 2, true);
        facet.add_value("blue", 0, false);
        assert_eq!(facet.count("red"), 2);
        assert_eq!(facet.count("green"), 0);

        let results = SearchResults::new(Vec::<u8>::new(), 0).with_facets(vec![facet]);
        assert!(results.is_empty());
        assert!(results.facet("color").unwrap().values[0].selected);
    }
}
