//! Selection state for the product detail overlay

use super::catalog::Catalog;
use super::product::Product;

/// Holds at most one selected product, by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Select a product, replacing any previous selection
    pub fn open(&mut self, product: &Product) {
        self.selected = Some(product.id.clone());
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selected product against the catalog
    pub fn product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.selected.as_deref().and_then(|id| catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let catalog = Catalog::seeded();
        let mut selection = Selection::new();
        assert!(!selection.is_open());
        assert!(selection.product(&catalog).is_none());

        selection.open(&catalog.products()[1]);
        assert_eq!(selection.selected_id(), Some("2"));
        assert_eq!(
            selection.product(&catalog).map(|p| p.title.as_str()),
            Some("Organic Honey Pure 500g Jar")
        );

        selection.close();
        assert!(!selection.is_open());
    }

    #[test]
    fn test_open_replaces_previous_selection() {
        let catalog = Catalog::seeded();
        let mut selection = Selection::new();
        selection.open(&catalog.products()[0]);
        selection.open(&catalog.products()[4]);
        assert_eq!(selection.selected_id(), Some("5"));
    }
}
