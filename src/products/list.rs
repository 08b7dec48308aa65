use crate::catalog::{CatalogError, Product};

/// Fetched products with a case-insensitive name filter and a selection.
///
#[derive(Debug, Default)]
pub struct ProductList {
    products: Vec<Product>,
    filter: String,
    selected: usize,
    loading: bool,
    error_message: Option<String>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Apply the outcome of a fetch. A failure keeps the previous products.
    ///
    pub fn on_products_retrieved(&mut self, result: Result<Vec<Product>, CatalogError>) {
        self.loading = false;
        match result {
            Ok(products) => {
                log::info!("Received {} products.", products.len());
                self.products = products;
                self.error_message = None;
                self.clamp_selection();
            }
            Err(e) => {
                log::error!("Failed to fetch products: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.clamp_selection();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.clamp_selection();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.clamp_selection();
    }

    /// Products whose name contains the filter, ignoring case.
    ///
    pub fn filtered(&self) -> Vec<&Product> {
        let needle = self.filter.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.product_name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.filtered().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.filtered().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::testing::product;

    fn list() -> ProductList {
        let mut list = ProductList::new();
        list.on_products_retrieved(Ok(vec![
            product(1, "Leaf Rake"),
            product(2, "Garden Cart"),
            product(5, "Hammer"),
        ]));
        list
    }

    #[test]
    fn filter_ignores_case() {
        let mut list = list();
        for c in "GARDEN".chars() {
            list.push_filter_char(c);
        }
        let names: Vec<&str> = list
            .filtered()
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Garden Cart"]);

        list.clear_filter();
        assert_eq!(list.filtered().len(), 3);
    }

    #[test]
    fn selection_wraps() {
        let mut list = list();
        list.select_previous();
        assert_eq!(list.selected_product().map(|p| p.id), Some(5));
        list.select_next();
        assert_eq!(list.selected_product().map(|p| p.id), Some(1));
    }

    #[test]
    fn selection_stays_inside_filter() {
        let mut list = list();
        list.select_next();
        list.select_next();
        list.push_filter_char('r');
        list.push_filter_char('a');
        list.push_filter_char('k');
        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.selected_product().map(|p| p.id), Some(1));

        list.push_filter_char('z');
        assert_eq!(list.selected_product(), None);
        list.pop_filter_char();
        assert_eq!(list.filter(), "rak");
    }

    #[test]
    fn failure_keeps_products() {
        let mut list = list();
        list.set_loading();
        list.on_products_retrieved(Err(CatalogError::Api {
            status: 503,
            message: "maintenance".to_string(),
        }));
        assert!(!list.is_loading());
        assert_eq!(list.filtered().len(), 3);
        assert_eq!(
            list.error_message(),
            Some("Server returned code: 503, error message is: maintenance")
        );
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut list = ProductList::new();
        list.select_next();
        list.select_previous();
        assert_eq!(list.selected_product(), None);
    }
}
